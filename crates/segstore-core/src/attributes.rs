//! Immutable attribute mapping carried by segment snapshots.
//!
//! An [`AttributeMap`] owns its entries behind an `Arc`, so cloning is cheap and
//! no caller-held collection can alias it. Every empty map shares one
//! process-wide allocation.

use std::collections::{btree_map, BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::ids::AttributeId;

static EMPTY: Lazy<Arc<BTreeMap<AttributeId, i64>>> = Lazy::new(|| Arc::new(BTreeMap::new()));

/// Read-only mapping from attribute id to a 64-bit value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AttributeMap {
    entries: Arc<BTreeMap<AttributeId, i64>>,
}

impl AttributeMap {
    /// Returns the canonical empty mapping.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Arc::clone(&EMPTY),
        }
    }

    fn from_owned(entries: BTreeMap<AttributeId, i64>) -> Self {
        if entries.is_empty() {
            Self::empty()
        } else {
            Self {
                entries: Arc::new(entries),
            }
        }
    }

    /// Returns the value stored for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &AttributeId) -> Option<i64> {
        self.entries.get(id).copied()
    }

    #[must_use]
    pub fn contains_key(&self, id: &AttributeId) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in ascending id order.
    pub fn iter(&self) -> btree_map::Iter<'_, AttributeId, i64> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, AttributeId, i64> {
        self.entries.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, AttributeId, i64> {
        self.entries.values()
    }

    /// Copies the entries into a new, detached `HashMap` the caller may mutate.
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<AttributeId, i64> {
        self.entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    pub(crate) fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl Default for AttributeMap {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl FromIterator<(AttributeId, i64)> for AttributeMap {
    /// Later entries win when an id repeats.
    fn from_iter<I: IntoIterator<Item = (AttributeId, i64)>>(iter: I) -> Self {
        Self::from_owned(iter.into_iter().collect())
    }
}

impl<S: BuildHasher> From<HashMap<AttributeId, i64, S>> for AttributeMap {
    fn from(value: HashMap<AttributeId, i64, S>) -> Self {
        value.into_iter().collect()
    }
}

impl<S: BuildHasher> From<&HashMap<AttributeId, i64, S>> for AttributeMap {
    fn from(value: &HashMap<AttributeId, i64, S>) -> Self {
        value.iter().map(|(k, v)| (*k, *v)).collect()
    }
}

impl From<BTreeMap<AttributeId, i64>> for AttributeMap {
    fn from(value: BTreeMap<AttributeId, i64>) -> Self {
        Self::from_owned(value)
    }
}

impl From<&BTreeMap<AttributeId, i64>> for AttributeMap {
    fn from(value: &BTreeMap<AttributeId, i64>) -> Self {
        Self::from_owned(value.clone())
    }
}

impl<M: Into<AttributeMap>> From<Option<M>> for AttributeMap {
    fn from(value: Option<M>) -> Self {
        value.map_or_else(Self::empty, Into::into)
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a AttributeId, &'a i64);
    type IntoIter = btree_map::Iter<'a, AttributeId, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
