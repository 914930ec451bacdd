//! # Search Engines
//!
//! Three interchangeable strategies for frequent-itemset discovery over the
//! same problem:
//!
//! 1. **Apriori** (`apriori`): breadth-first, level-wise candidate generation
//!    with subset pruning and a full scan per level
//! 2. **Eclat** (`eclat`): depth-first prefix extension, supports from tid-list
//!    intersections
//! 3. **dEclat** (`declat`): depth-first prefix extension, supports from
//!    diffset subtraction
//!
//! ## Guarantees
//! - For a fixed store and threshold all three return the same set of
//!   `(itemset, support)` pairs; only discovery order differs
//! - Every subset of a reported itemset is reported (anti-monotonicity)
//! - Search state lives inside one `search` call, so an engine can be reused

/*
 * File: /src/engine/mod.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Created engine module with the SearchEngine trait
 */

pub mod apriori;
pub mod declat;
pub mod eclat;

pub use apriori::CandidateSearchEngine;
pub use declat::DiffsetSearchEngine;
pub use eclat::TidlistSearchEngine;

use crate::config::Algorithm;
use crate::dataset::TransactionStore;
use crate::itemset::FrequentItemset;

/// Frequent-itemset search strategy
pub trait SearchEngine {
    /// Every itemset with support ≥ `min_support`, in discovery order.
    ///
    /// `min_support` is an absolute transaction count. Stores in the
    /// "wrong" layout are converted before the search starts.
    fn search(&self, store: &TransactionStore, min_support: usize) -> Vec<FrequentItemset>;

    fn name(&self) -> &str;
}

impl<T: SearchEngine + ?Sized> SearchEngine for Box<T> {
    fn search(&self, store: &TransactionStore, min_support: usize) -> Vec<FrequentItemset> {
        (**self).search(store, min_support)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl Algorithm {
    pub fn engine(&self) -> Box<dyn SearchEngine> {
        match self {
            Algorithm::Apriori => Box::new(CandidateSearchEngine::new()),
            Algorithm::Eclat => Box::new(TidlistSearchEngine::new()),
            Algorithm::DEclat => Box::new(DiffsetSearchEngine::new()),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::dataset::{HorizontalDb, Transaction, TransactionStore};
    use crate::itemset::{FrequentItemset, Itemset};

    /// `[{a,b},{a,b,c},{b,c},{a,c}]`
    pub fn abc_store() -> TransactionStore {
        TransactionStore::Horizontal(HorizontalDb::new(vec![
            Transaction::new(["a", "b"]),
            Transaction::new(["a", "b", "c"]),
            Transaction::new(["b", "c"]),
            Transaction::new(["a", "c"]),
        ]))
    }

    pub fn fi(items: &[&str], support: usize) -> FrequentItemset {
        FrequentItemset::new(Itemset::new(items.iter().copied()).unwrap(), support)
    }

    /// Results sorted so that engines with different discovery orders compare equal
    pub fn sorted(mut found: Vec<FrequentItemset>) -> Vec<FrequentItemset> {
        found.sort_by(|a, b| a.itemset.cmp(&b.itemset));
        found
    }
}
