//! # Diffsets (dEclat)
//!
//! Same search tree as Eclat, but below the first level each node stores only
//! the diffset `d(P ∪ {i}) = t(P) \ t(P ∪ {i})` instead of a tid-list.
//!
//! ## Mathematical Basis
//! - Level 1: `d(i) = U \ t(i)` with `U` every tid in the store, `σ(i) = |t(i)|`
//! - Extension of `Pi` by sibling `Pj`: `d(Pij) = d(Pj) \ d(Pi)`
//! - Support: `σ(Pij) = σ(Pi) − |d(Pij)|`
//!
//! On dense data tid-lists cover most transactions, so diffsets stay small.

/*
 * File: /src/engine/declat.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Depth-first diffset engine on an explicit stack
 */

use log::debug;

use crate::dataset::TransactionStore;
use crate::engine::SearchEngine;
use crate::itemset::{FrequentItemset, Item, Itemset};
use crate::tidset::TidSet;

/// Search-tree node relative to the prefix of its frame
#[derive(Debug, Clone)]
struct DiffNode {
    item: Item,
    support: usize,
    diffset: TidSet,
}

impl DiffNode {
    /// The node for `self ∪ sibling` one level down.
    fn extend(&self, sibling: &DiffNode) -> DiffNode {
        let diffset = sibling.diffset.difference(&self.diffset);
        DiffNode {
            item: sibling.item.clone(),
            support: self.support - diffset.len(),
            diffset,
        }
    }
}

struct Frame {
    prefix: Option<Itemset>,
    nodes: Vec<DiffNode>,
}

/// Depth-first diffset engine
#[derive(Debug, Clone, Default)]
pub struct DiffsetSearchEngine;

impl DiffsetSearchEngine {
    pub fn new() -> Self {
        Self
    }
}

impl SearchEngine for DiffsetSearchEngine {
    fn search(&self, store: &TransactionStore, min_support: usize) -> Vec<FrequentItemset> {
        let db = store.vertical();
        let universe = db.universe();

        let roots: Vec<DiffNode> = db
            .tid_lists()
            .iter()
            .filter(|(_, tids)| tids.len() >= min_support)
            .map(|(item, tids)| DiffNode {
                item: item.clone(),
                support: tids.len(),
                diffset: universe.difference(tids),
            })
            .collect();
        debug!(
            "declat: {} frequent 1-itemsets over {} transactions",
            roots.len(),
            universe.len()
        );

        let mut frequent = Vec::new();
        let mut stack = vec![Frame {
            prefix: None,
            nodes: roots,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(node) = frame.nodes.pop() else {
                stack.pop();
                continue;
            };
            if node.support < min_support {
                continue;
            }

            let extensions: Vec<DiffNode> = frame
                .nodes
                .iter()
                .map(|sibling| node.extend(sibling))
                .filter(|child| child.support >= min_support)
                .collect();

            let itemset = match &frame.prefix {
                Some(prefix) => prefix.with_item(node.item),
                None => Itemset::singleton(node.item),
            };
            frequent.push(FrequentItemset::new(itemset.clone(), node.support));
            if !extensions.is_empty() {
                stack.push(Frame {
                    prefix: Some(itemset),
                    nodes: extensions,
                });
            }
        }

        frequent
    }

    fn name(&self) -> &str {
        "declat"
    }
}
