/*
 * File: /src/tidset.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Transaction ids and sorted tid sets
 */
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Transaction id, 0-based by position in the horizontal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tid(pub usize);

impl fmt::Display for Tid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ascending, duplicate-free set of transaction ids.
///
/// Used both as a tid-list (support = `len()`) and as a diffset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Tid>", into = "Vec<Tid>")]
pub struct TidSet {
    tids: Vec<Tid>,
}

impl TidSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tids.is_empty()
    }

    pub fn contains(&self, tid: Tid) -> bool {
        self.tids.binary_search(&tid).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tid> + '_ {
        self.tids.iter().copied()
    }

    pub fn max(&self) -> Option<Tid> {
        self.tids.last().copied()
    }

    /// Appends `tid`, keeping the set sorted. Cheap when ids arrive in order.
    pub fn insert(&mut self, tid: Tid) {
        match self.tids.last() {
            Some(last) if *last < tid => self.tids.push(tid),
            None => self.tids.push(tid),
            _ => {
                if let Err(pos) = self.tids.binary_search(&tid) {
                    self.tids.insert(pos, tid);
                }
            }
        }
    }

    /// `self ∩ other`
    pub fn intersection(&self, other: &TidSet) -> TidSet {
        let mut tids = Vec::with_capacity(self.len().min(other.len()));
        let (mut i, mut j) = (0, 0);
        while i < self.tids.len() && j < other.tids.len() {
            match self.tids[i].cmp(&other.tids[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    tids.push(self.tids[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        TidSet { tids }
    }

    /// `self \ other`
    pub fn difference(&self, other: &TidSet) -> TidSet {
        let mut tids = Vec::with_capacity(self.len());
        let mut j = 0;
        for &tid in &self.tids {
            while j < other.tids.len() && other.tids[j] < tid {
                j += 1;
            }
            if j < other.tids.len() && other.tids[j] == tid {
                continue;
            }
            tids.push(tid);
        }
        TidSet { tids }
    }

    /// `self ∪ other`
    pub fn union(&self, other: &TidSet) -> TidSet {
        let mut tids = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.tids.len() && j < other.tids.len() {
            match self.tids[i].cmp(&other.tids[j]) {
                Ordering::Less => {
                    tids.push(self.tids[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    tids.push(other.tids[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    tids.push(self.tids[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        tids.extend_from_slice(&self.tids[i..]);
        tids.extend_from_slice(&other.tids[j..]);
        TidSet { tids }
    }
}

impl FromIterator<Tid> for TidSet {
    fn from_iter<I: IntoIterator<Item = Tid>>(iter: I) -> Self {
        let mut tids: Vec<Tid> = iter.into_iter().collect();
        tids.sort_unstable();
        tids.dedup();
        TidSet { tids }
    }
}

impl From<Vec<Tid>> for TidSet {
    fn from(tids: Vec<Tid>) -> Self {
        tids.into_iter().collect()
    }
}

impl From<TidSet> for Vec<Tid> {
    fn from(set: TidSet) -> Self {
        set.tids
    }
}

impl FromIterator<usize> for TidSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().map(Tid).collect()
    }
}
