//! # Tid-list Intersection (Eclat)
//!
//! Depth-first prefix extension over the vertical layout. The support of an
//! extended itemset is the size of the intersection of its parents' tid-lists,
//! so raw transactions are never rescanned after the first level.

/*
 * File: /src/engine/eclat.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Depth-first tid-list engine on an explicit stack
 */

use log::debug;

use crate::dataset::TransactionStore;
use crate::engine::SearchEngine;
use crate::itemset::{FrequentItemset, Item, Itemset};
use crate::tidset::TidSet;

/// One equivalence class: a prefix and the items that may still extend it
struct Frame {
    prefix: Option<Itemset>,
    candidates: Vec<(Item, TidSet)>,
}

/// Depth-first tid-list intersection engine
#[derive(Debug, Clone, Default)]
pub struct TidlistSearchEngine;

impl TidlistSearchEngine {
    pub fn new() -> Self {
        Self
    }
}

impl SearchEngine for TidlistSearchEngine {
    fn search(&self, store: &TransactionStore, min_support: usize) -> Vec<FrequentItemset> {
        let db = store.vertical();

        // the only pass over raw per-item tid-lists; BTreeMap order is canonical
        let roots: Vec<(Item, TidSet)> = db
            .tid_lists()
            .iter()
            .filter(|(_, tids)| tids.len() >= min_support)
            .map(|(item, tids)| (item.clone(), tids.clone()))
            .collect();
        debug!("eclat: {} frequent 1-itemsets", roots.len());

        let mut frequent = Vec::new();
        let mut stack = vec![Frame {
            prefix: None,
            candidates: roots,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some((item, tids)) = frame.candidates.pop() else {
                stack.pop();
                continue;
            };
            let support = tids.len();
            if support < min_support {
                continue;
            }

            let itemset = match &frame.prefix {
                Some(prefix) => prefix.with_item(item),
                None => Itemset::singleton(item),
            };

            let extensions: Vec<(Item, TidSet)> = frame
                .candidates
                .iter()
                .filter_map(|(other, other_tids)| {
                    let shared = tids.intersection(other_tids);
                    (shared.len() >= min_support).then(|| (other.clone(), shared))
                })
                .collect();

            frequent.push(FrequentItemset::new(itemset.clone(), support));
            if !extensions.is_empty() {
                stack.push(Frame {
                    prefix: Some(itemset),
                    candidates: extensions,
                });
            }
        }

        frequent
    }

    fn name(&self) -> &str {
        "eclat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{HorizontalDb, Transaction, VerticalDb};
    use crate::engine::test_utils::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_depth_first_discovery_order() {
        let found = TidlistSearchEngine::new().search(&abc_store(), 1);
        // last candidate first, each extended before its siblings
        assert_eq!(
            found,
            vec![
                fi(&["c"], 3),
                fi(&["b", "c"], 2),
                fi(&["a", "b", "c"], 1),
                fi(&["a", "c"], 2),
                fi(&["b"], 3),
                fi(&["a", "b"], 2),
                fi(&["a"], 3),
            ]
        );
    }

    #[test]
    fn test_identical_tidlists_both_propagate() {
        let mut lists = BTreeMap::new();
        lists.insert(Item::from("x"), TidSet::from_iter([0usize, 1, 2]));
        lists.insert(Item::from("y"), TidSet::from_iter([0usize, 1, 2]));
        let store = TransactionStore::Vertical(VerticalDb::new(lists));
        let found = sorted(TidlistSearchEngine::new().search(&store, 2));
        assert_eq!(found, vec![fi(&["x"], 3), fi(&["x", "y"], 3), fi(&["y"], 3)]);
    }

    #[test]
    fn test_infrequent_item_never_extended() {
        let store = TransactionStore::Horizontal(HorizontalDb::new(vec![
            Transaction::new(["a", "b", "z"]),
            Transaction::new(["a", "b"]),
            Transaction::new(["a", "b"]),
        ]));
        let found = TidlistSearchEngine::new().search(&store, 2);
        assert!(found.iter().all(|f| !f.itemset.contains(&Item::from("z"))));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = TransactionStore::Vertical(VerticalDb::default());
        assert!(TidlistSearchEngine::new().search(&store, 1).is_empty());
    }
}
