/*
 * File: /src/lib.rs
 * Created Date: Monday, January 22nd 2024
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Frequent itemset and association rule mining
 */

//! Frequent-itemset and association-rule mining.
//!
//! Three interchangeable engines (Apriori, Eclat, dEclat) share one
//! [`engine::SearchEngine`] seam; [`pipeline::MiningPipeline`] wires loading,
//! mining and rule generation together and returns a [`report::MiningReport`].
//!
//! ```
//! use fast_itemset::config::{Algorithm, MinSupport};
//! use fast_itemset::dataset::{HorizontalDb, Transaction, TransactionStore};
//! use fast_itemset::pipeline::MiningPipeline;
//!
//! let store = TransactionStore::from(HorizontalDb::new(vec![
//!     Transaction::new(["a", "b"]),
//!     Transaction::new(["a", "b", "c"]),
//!     Transaction::new(["b", "c"]),
//!     Transaction::new(["a", "c"]),
//! ]));
//! let report = MiningPipeline::builder()
//!     .algorithm(Algorithm::Eclat)
//!     .min_support(MinSupport::Absolute(2))
//!     .build()
//!     .unwrap()
//!     .run(&store)
//!     .unwrap();
//! assert_eq!(report.itemsets.len(), 6);
//! ```

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod itemset;
pub mod memory;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod tidset;

use chrono::Local;
use log::LevelFilter;

pub use config::{Algorithm, InputFormat, MinSupport, MiningConfig};
pub use dataset::{HorizontalDb, Transaction, TransactionStore, VerticalDb};
pub use engine::SearchEngine;
pub use error::MiningError;
pub use itemset::{FrequentItemset, Item, Itemset};
pub use pipeline::MiningPipeline;
pub use report::MiningReport;
pub use rules::{AssociationRule, RuleGenerator};
pub use tidset::{Tid, TidSet};

pub(crate) fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Installs `simple_logger` at `level`.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    simple_logger::SimpleLogger::new().with_level(level).init()
}
