/*
 * File: /src/itemset.rs
 * Created Date: Monday, October 19th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 19th October 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-19		Zihan	Canonical item and itemset value types
 */
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MiningError;

/// An opaque item token, ordered lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    pub fn new(token: impl Into<String>) -> Self {
        Item(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Item {
    fn from(token: &str) -> Self {
        Item(token.to_string())
    }
}

impl From<String> for Item {
    fn from(token: String) -> Self {
        Item(token)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-empty set of items kept in canonical (sorted, de-duplicated) form.
///
/// Every constructor keeps the items sorted and unique, so equality,
/// hashing and ordering all agree on the same representation and an
/// `Itemset` can be used directly as a support-map key.
///
/// # Example
/// ```
/// use fast_itemset::itemset::Itemset;
/// let a = Itemset::new(["b", "a", "b"]).unwrap();
/// let b = Itemset::new(["a", "b"]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "a b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Itemset {
    items: Vec<Item>,
}

impl TryFrom<Vec<Item>> for Itemset {
    type Error = MiningError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Itemset::new(items)
    }
}

impl From<Itemset> for Vec<Item> {
    fn from(itemset: Itemset) -> Self {
        itemset.items
    }
}

impl Itemset {
    pub fn new<I, T>(items: I) -> Result<Self, MiningError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(MiningError::EmptyItemset);
        }
        Ok(Self::canonical(items))
    }

    pub fn singleton(item: Item) -> Self {
        Itemset { items: vec![item] }
    }

    fn canonical(mut items: Vec<Item>) -> Self {
        items.sort();
        items.dedup();
        Itemset { items }
    }

    /// The itemset extended by one item (a no-op if already present)
    pub fn with_item(&self, item: Item) -> Self {
        match self.items.binary_search(&item) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut items = self.items.clone();
                items.insert(pos, item);
                Itemset { items }
            }
        }
    }

    pub fn union(&self, other: &Itemset) -> Self {
        let mut items = Vec::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.items.len() && j < other.items.len() {
            match self.items[i].cmp(&other.items[j]) {
                std::cmp::Ordering::Less => {
                    items.push(self.items[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    items.push(other.items[j].clone());
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    items.push(self.items[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        items.extend_from_slice(&self.items[i..]);
        items.extend_from_slice(&other.items[j..]);
        Itemset { items }
    }

    /// The itemset with `item` removed, or `None` when that would leave it empty.
    pub fn without(&self, item: &Item) -> Option<Self> {
        let items: Vec<Item> = self.items.iter().filter(|i| *i != item).cloned().collect();
        if items.is_empty() {
            None
        } else {
            Some(Itemset { items })
        }
    }

    /// Items of `self` not in `other`, or `None` if nothing remains.
    pub fn difference(&self, other: &Itemset) -> Option<Self> {
        let items: Vec<Item> = self
            .items
            .iter()
            .filter(|i| !other.contains(i))
            .cloned()
            .collect();
        if items.is_empty() {
            None
        } else {
            Some(Itemset { items })
        }
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.binary_search(item).is_ok()
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        is_sorted_subset(&self.items, &other.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A discovered itemset together with its support count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrequentItemset {
    pub itemset: Itemset,
    pub support: usize,
}

impl FrequentItemset {
    pub fn new(itemset: Itemset, support: usize) -> Self {
        Self { itemset, support }
    }
}

impl fmt::Display for FrequentItemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.itemset, self.support)
    }
}

/// Subset test over two ascending slices in one linear pass.
pub(crate) fn is_sorted_subset(needle: &[Item], haystack: &[Item]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    let mut rest = haystack.iter();
    'outer: for wanted in needle {
        for candidate in rest.by_ref() {
            match candidate.cmp(wanted) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => continue 'outer,
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Itemset {
        Itemset::new(items.iter().copied()).unwrap()
    }

    #[test]
    fn test_canonical_form() {
        let a = set(&["c", "a", "b", "a"]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.to_string(), "a b c");
        assert_eq!(a, set(&["a", "b", "c"]));
    }

    #[test]
    fn test_empty_itemset_rejected() {
        let empty: Vec<&str> = Vec::new();
        assert!(matches!(Itemset::new(empty), Err(MiningError::EmptyItemset)));
    }

    #[test]
    fn test_lexicographic_item_order() {
        // "10" sorts before "9" as strings
        let a = set(&["9", "10"]);
        assert_eq!(a.to_string(), "10 9");
    }

    #[test]
    fn test_union_and_extension() {
        let ab = set(&["a", "b"]);
        let bc = set(&["b", "c"]);
        assert_eq!(ab.union(&bc), set(&["a", "b", "c"]));
        assert_eq!(ab.with_item(Item::from("0")), set(&["0", "a", "b"]));
        assert_eq!(ab.with_item(Item::from("a")), ab);
    }

    #[test]
    fn test_without_and_difference() {
        let abc = set(&["a", "b", "c"]);
        assert_eq!(abc.without(&Item::from("b")), Some(set(&["a", "c"])));
        assert_eq!(set(&["a"]).without(&Item::from("a")), None);
        assert_eq!(abc.difference(&set(&["a"])), Some(set(&["b", "c"])));
        assert_eq!(abc.difference(&abc), None);
    }

    #[test]
    fn test_subset() {
        let abc = set(&["a", "b", "c"]);
        assert!(set(&["a", "c"]).is_subset_of(&abc));
        assert!(abc.is_subset_of(&abc));
        assert!(!set(&["a", "d"]).is_subset_of(&abc));
        assert!(!abc.is_subset_of(&set(&["a", "b"])));
    }

    #[test]
    fn test_deserialize_goes_through_constructor() {
        use serde::de::value::{Error as ValueError, SeqDeserializer};
        use serde::de::IntoDeserializer;

        let de: SeqDeserializer<_, ValueError> = vec!["b", "a", "a"].into_deserializer();
        let itemset = Itemset::deserialize(de).unwrap();
        assert_eq!(itemset, set(&["a", "b"]));
        assert_eq!(itemset.len(), 2);

        let empty: SeqDeserializer<_, ValueError> = Vec::<&str>::new().into_deserializer();
        assert!(Itemset::deserialize(empty).is_err());
    }
}
