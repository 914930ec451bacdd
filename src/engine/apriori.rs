//! # Candidate Generation (Apriori)
//!
//! Level-wise search: every frequent k-itemset layer is self-joined into
//! (k+1)-candidates, candidates with an infrequent k-subset are pruned, and
//! the survivors are counted with one pass over the transactions.
//!
//! Counting dominates the cost: O(|candidates| × |transactions| × k) per level.

/*
 * File: /src/engine/apriori.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Breadth-first generate-and-test engine
 */

use std::collections::{BTreeMap, HashSet};

use log::debug;

use crate::dataset::HorizontalDb;
use crate::dataset::TransactionStore;
use crate::engine::SearchEngine;
use crate::itemset::{FrequentItemset, Item, Itemset};

/// Breadth-first generate-and-test engine
#[derive(Debug, Clone, Default)]
pub struct CandidateSearchEngine;

impl CandidateSearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Frequent 1-itemsets in canonical order
    fn frequent_items(&self, db: &HorizontalDb, min_support: usize) -> Vec<FrequentItemset> {
        let mut counts: BTreeMap<&Item, usize> = BTreeMap::new();
        for transaction in db.transactions() {
            for item in transaction.items() {
                *counts.entry(item).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .filter(|&(_, support)| support >= min_support)
            .map(|(item, support)| FrequentItemset::new(Itemset::singleton(item.clone()), support))
            .collect()
    }

    /// Self-join of a k-layer into (k+1)-candidates.
    ///
    /// For k = 1 every pair is a candidate. Above that a union is kept only
    /// if all of its k-subsets are in the layer; each union is classified
    /// once and remembered either way.
    fn generate_candidates(&self, layer: &[Itemset], k: usize) -> Vec<Itemset> {
        let layer_set: HashSet<&Itemset> = layer.iter().collect();
        let mut candidates: Vec<Itemset> = Vec::new();
        let mut accepted: HashSet<Itemset> = HashSet::new();
        let mut rejected: HashSet<Itemset> = HashSet::new();

        for (i, left) in layer.iter().enumerate() {
            for right in &layer[i + 1..] {
                let union = left.union(right);
                if union.len() != k + 1 {
                    continue;
                }
                if k == 1 {
                    if accepted.insert(union.clone()) {
                        candidates.push(union);
                    }
                    continue;
                }
                if accepted.contains(&union) || rejected.contains(&union) {
                    continue;
                }

                let all_subsets_frequent = union.iter().all(|item| {
                    union
                        .without(item)
                        .map_or(false, |subset| layer_set.contains(&subset))
                });
                if all_subsets_frequent {
                    accepted.insert(union.clone());
                    candidates.push(union);
                } else {
                    rejected.insert(union);
                }
            }
        }

        candidates.sort();
        candidates
    }

    /// One scan of the database, testing each candidate for containment
    fn count_supports(&self, db: &HorizontalDb, candidates: &[Itemset]) -> Vec<usize> {
        let mut supports = vec![0usize; candidates.len()];
        for transaction in db.transactions() {
            if transaction.is_empty() {
                continue;
            }
            for (support, candidate) in supports.iter_mut().zip(candidates) {
                if transaction.contains_all(candidate) {
                    *support += 1;
                }
            }
        }
        supports
    }
}

impl SearchEngine for CandidateSearchEngine {
    fn search(&self, store: &TransactionStore, min_support: usize) -> Vec<FrequentItemset> {
        let db = store.horizontal();
        let mut frequent = self.frequent_items(&db, min_support);
        let mut layer: Vec<Itemset> = frequent.iter().map(|f| f.itemset.clone()).collect();
        debug!("apriori: {} frequent 1-itemsets", layer.len());

        let mut k = 1;
        while !layer.is_empty() {
            let candidates = self.generate_candidates(&layer, k);
            if candidates.is_empty() {
                break;
            }
            let supports = self.count_supports(&db, &candidates);

            k += 1;
            let survivors: Vec<FrequentItemset> = candidates
                .into_iter()
                .zip(supports)
                .filter(|&(_, support)| support >= min_support)
                .map(|(itemset, support)| FrequentItemset::new(itemset, support))
                .collect();
            debug!("apriori: {} frequent {}-itemsets", survivors.len(), k);

            layer = survivors.iter().map(|f| f.itemset.clone()).collect();
            frequent.extend(survivors);
        }

        frequent
    }

    fn name(&self) -> &str {
        "apriori"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Transaction, VerticalDb};
    use crate::engine::test_utils::*;
    use std::io::Cursor;

    fn set(items: &[&str]) -> Itemset {
        Itemset::new(items.iter().copied()).unwrap()
    }

    #[test]
    fn test_discovery_order_is_level_wise() {
        let found = CandidateSearchEngine::new().search(&abc_store(), 2);
        assert_eq!(
            found,
            vec![
                fi(&["a"], 3),
                fi(&["b"], 3),
                fi(&["c"], 3),
                fi(&["a", "b"], 2),
                fi(&["a", "c"], 2),
                fi(&["b", "c"], 2),
            ]
        );
    }

    #[test]
    fn test_three_itemset_found_at_minsup_one() {
        let found = CandidateSearchEngine::new().search(&abc_store(), 1);
        assert_eq!(found.len(), 7);
        assert_eq!(found.last(), Some(&fi(&["a", "b", "c"], 1)));
    }

    #[test]
    fn test_prune_rejects_union_with_infrequent_subset() {
        let engine = CandidateSearchEngine::new();
        // {b,c} missing, so {a,b,c} cannot be a candidate
        let layer = vec![set(&["a", "b"]), set(&["a", "c"]), set(&["a", "d"]), set(&["c", "d"])];
        let candidates = engine.generate_candidates(&layer, 2);
        assert_eq!(candidates, vec![set(&["a", "c", "d"])]);
    }

    #[test]
    fn test_first_level_joins_every_pair() {
        let engine = CandidateSearchEngine::new();
        let layer = vec![set(&["a"]), set(&["b"]), set(&["c"])];
        let candidates = engine.generate_candidates(&layer, 1);
        assert_eq!(candidates, vec![set(&["a", "b"]), set(&["a", "c"]), set(&["b", "c"])]);
    }

    #[test]
    fn test_empty_store_and_high_threshold() {
        let engine = CandidateSearchEngine::new();
        let empty = TransactionStore::Horizontal(HorizontalDb::default());
        assert!(engine.search(&empty, 1).is_empty());
        assert!(engine.search(&abc_store(), 5).is_empty());
    }

    #[test]
    fn test_vertical_store_with_huge_tid() {
        let db = VerticalDb::from_reader(Cursor::new(format!("a: 0,{}\nb: 0\n", usize::MAX)))
            .unwrap();
        let found = CandidateSearchEngine::new().search(&TransactionStore::Vertical(db), 1);
        assert_eq!(found, vec![fi(&["a"], 2), fi(&["b"], 1), fi(&["a", "b"], 1)]);
    }

    #[test]
    fn test_minsup_equal_to_transaction_count() {
        let store = TransactionStore::Horizontal(HorizontalDb::new(vec![
            Transaction::new(["a", "b", "x"]),
            Transaction::new(["a", "x"]),
            Transaction::new(["b", "x", "a"]),
        ]));
        let found = CandidateSearchEngine::new().search(&store, 3);
        assert_eq!(found, vec![fi(&["a"], 3), fi(&["x"], 3), fi(&["a", "x"], 3)]);
    }
}
