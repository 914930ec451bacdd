/*
 * File: /src/dataset.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Horizontal / vertical transaction stores and their loaders
 */

//! Transaction stores.
//!
//! Two text formats are understood:
//!
//! * horizontal: one transaction per line, items separated by whitespace
//!   (`a b c`); the transaction id is the 0-based line index;
//! * vertical: one item per line followed by its tid-list (`a: 0,1,3,`).
//!
//! Malformed lines are reported, never skipped, since skipping a line shifts
//! every following transaction id.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::InputFormat;
use crate::error::MiningError;
use crate::itemset::{is_sorted_subset, Item, Itemset};
use crate::tidset::{Tid, TidSet};

/// One transaction: its items in canonical order. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct Transaction {
    items: Vec<Item>,
}

impl From<Vec<Item>> for Transaction {
    fn from(items: Vec<Item>) -> Self {
        Transaction::new(items)
    }
}

impl From<Transaction> for Vec<Item> {
    fn from(transaction: Transaction) -> Self {
        transaction.items
    }
}

impl Transaction {
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let mut items: Vec<Item> = items.into_iter().map(Into::into).collect();
        items.sort();
        items.dedup();
        Transaction { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this transaction supports `itemset`
    pub fn contains_all(&self, itemset: &Itemset) -> bool {
        is_sorted_subset(itemset.items(), &self.items)
    }
}

/// Transactions indexed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizontalDb {
    transactions: Vec<Transaction>,
}

impl HorizontalDb {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MiningError> {
        let file = File::open(path.as_ref())?;
        let db = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} transactions from {}",
            db.len(),
            path.as_ref().display()
        );
        Ok(db)
    }

    /// Parses the horizontal text format. Blank lines become empty
    /// transactions so that later ids stay aligned with line positions.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MiningError> {
        let mut transactions = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MiningError::data_format(idx + 1, e.to_string()))?;
            transactions.push(Transaction::new(line.split_whitespace()));
        }
        Ok(Self { transactions })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Vertical view with tid = line index, as the format converter produces it.
    pub fn to_vertical(&self) -> VerticalDb {
        let mut tid_lists: BTreeMap<Item, TidSet> = BTreeMap::new();
        for (tid, transaction) in self.transactions.iter().enumerate() {
            for item in transaction.items() {
                tid_lists.entry(item.clone()).or_default().insert(Tid(tid));
            }
        }
        VerticalDb { tid_lists }
    }
}

/// Item → tid-list mapping, items in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalDb {
    tid_lists: BTreeMap<Item, TidSet>,
}

impl VerticalDb {
    pub fn new(tid_lists: BTreeMap<Item, TidSet>) -> Self {
        Self { tid_lists }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MiningError> {
        let file = File::open(path.as_ref())?;
        let db = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} tid-lists from {}",
            db.item_count(),
            path.as_ref().display()
        );
        Ok(db)
    }

    /// Parses `item: tid,tid,...` lines. A trailing comma is accepted and
    /// blank lines are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MiningError> {
        let mut tid_lists = BTreeMap::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| MiningError::data_format(line_no, e.to_string()))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (item, tids) = line
                .split_once(':')
                .ok_or_else(|| MiningError::data_format(line_no, "missing ':' separator"))?;
            let item = item.trim();
            if item.is_empty() {
                return Err(MiningError::data_format(line_no, "empty item"));
            }

            let mut tid_set = TidSet::new();
            for token in tids.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let tid = token.parse::<usize>().map_err(|_| {
                    MiningError::data_format(line_no, format!("invalid transaction id '{}'", token))
                })?;
                tid_set.insert(Tid(tid));
            }

            if tid_lists.insert(Item::new(item), tid_set).is_some() {
                return Err(MiningError::data_format(
                    line_no,
                    format!("item '{}' listed twice", item),
                ));
            }
        }
        Ok(Self { tid_lists })
    }

    pub fn tid_lists(&self) -> &BTreeMap<Item, TidSet> {
        &self.tid_lists
    }

    pub fn tids(&self, item: &Item) -> Option<&TidSet> {
        self.tid_lists.get(item)
    }

    pub fn item_count(&self) -> usize {
        self.tid_lists.len()
    }

    /// Every transaction id that appears under some item
    pub fn universe(&self) -> TidSet {
        self.tid_lists
            .values()
            .fold(TidSet::new(), |acc, tids| acc.union(tids))
    }

    /// Number of distinct transaction ids across all tid-lists
    pub fn transaction_count(&self) -> usize {
        self.universe().len()
    }

    /// Horizontal view with one row per distinct tid, rows in ascending tid
    /// order. Tid values only fix the order, so sparse or huge ids cost
    /// nothing and the row count equals [`transaction_count`](Self::transaction_count).
    pub fn to_horizontal(&self) -> HorizontalDb {
        let mut rows: BTreeMap<Tid, Vec<Item>> = BTreeMap::new();
        // BTreeMap iteration keeps each row already in canonical order
        for (item, tids) in &self.tid_lists {
            for tid in tids.iter() {
                rows.entry(tid).or_default().push(item.clone());
            }
        }
        HorizontalDb::new(
            rows.into_values()
                .map(|items| Transaction { items })
                .collect(),
        )
    }

    /// Writes the vertical text format, items and tids ascending.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), MiningError> {
        for (item, tids) in &self.tid_lists {
            let joined: Vec<String> = tids.iter().map(|t| t.to_string()).collect();
            writeln!(writer, "{}: {}", item, joined.join(","))?;
        }
        Ok(())
    }
}

/// Loader output handed to a search engine: either view of the same data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStore {
    Horizontal(HorizontalDb),
    Vertical(VerticalDb),
}

impl TransactionStore {
    pub fn load(path: impl AsRef<Path>, format: InputFormat) -> Result<Self, MiningError> {
        match format {
            InputFormat::Horizontal => Ok(TransactionStore::Horizontal(HorizontalDb::load(path)?)),
            InputFormat::Vertical => Ok(TransactionStore::Vertical(VerticalDb::load(path)?)),
        }
    }

    pub fn format(&self) -> InputFormat {
        match self {
            TransactionStore::Horizontal(_) => InputFormat::Horizontal,
            TransactionStore::Vertical(_) => InputFormat::Vertical,
        }
    }

    pub fn transaction_count(&self) -> usize {
        match self {
            TransactionStore::Horizontal(db) => db.len(),
            TransactionStore::Vertical(db) => db.transaction_count(),
        }
    }

    /// Borrows the horizontal view, building it only when the store is vertical.
    pub fn horizontal(&self) -> Cow<'_, HorizontalDb> {
        match self {
            TransactionStore::Horizontal(db) => Cow::Borrowed(db),
            TransactionStore::Vertical(db) => Cow::Owned(db.to_horizontal()),
        }
    }

    /// Borrows the vertical view, building it only when the store is horizontal.
    pub fn vertical(&self) -> Cow<'_, VerticalDb> {
        match self {
            TransactionStore::Horizontal(db) => Cow::Owned(db.to_vertical()),
            TransactionStore::Vertical(db) => Cow::Borrowed(db),
        }
    }
}

impl From<HorizontalDb> for TransactionStore {
    fn from(db: HorizontalDb) -> Self {
        TransactionStore::Horizontal(db)
    }
}

impl From<VerticalDb> for TransactionStore {
    fn from(db: VerticalDb) -> Self {
        TransactionStore::Vertical(db)
    }
}
