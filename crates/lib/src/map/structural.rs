//! Whole-map operations: cloning, merging, bulk delete, equality and sorting.

use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

use super::OrderedMap;
use crate::{Absent, Deletable};

/// Shallow copy with its own storage and empty caches.
impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            value_cache: OnceCell::new(),
            key_cache: OnceCell::new(),
        }
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Merge this map with `others` into a new map.
    ///
    /// Starts from a clone of `self` and sets every entry of each source in turn,
    /// so later sources win on key collisions. No source is modified.
    ///
    /// ```
    /// use collection::OrderedMap;
    ///
    /// let a = OrderedMap::from([("a", 1)]);
    /// let b = OrderedMap::from([("a", 2), ("b", 3)]);
    ///
    /// assert_eq!(a.concat([&b]), OrderedMap::from([("a", 2), ("b", 3)]));
    /// assert_eq!(b.concat([&a]), OrderedMap::from([("a", 1), ("b", 3)]));
    /// ```
    pub fn concat<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        K: Clone + 'a,
        V: Clone + 'a,
    {
        let mut merged = self.clone();
        let mut sources = 0usize;
        for other in others {
            sources += 1;
            for (key, value) in other {
                merged.set(key.clone(), value.clone());
            }
        }
        tracing::debug!(sources, len = merged.len(), "Concatenated maps");
        merged
    }

    /// Whether `other` holds the same keys mapped to equal values.
    ///
    /// `None` is never equal. Order is not compared. A key missing from `other`
    /// still matches when `self` maps it to an [absent](Absent) value, so
    /// `{a: Some(1), b: None}` equals `{a: Some(1), c: None}`. That makes the
    /// check one-directional; [`PartialEq`] is the strict, symmetric form.
    pub fn equals(&self, other: Option<&Self>) -> bool
    where
        V: PartialEq + Absent,
    {
        let Some(other) = other else {
            return false;
        };
        self.matches(other, |value| value.is_absent())
    }

    fn matches<F>(&self, other: &Self, missing_ok: F) -> bool
    where
        V: PartialEq,
        F: Fn(&V) -> bool,
    {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        self.entries
            .iter()
            .all(|(key, value)| match other.entries.get(key) {
                Some(theirs) => theirs == value,
                None => missing_ok(value),
            })
    }

    /// A new map sorted by the string form of each value.
    ///
    /// Strings compare by code point. The receiver is left untouched, and the
    /// sort is not guaranteed to be stable.
    pub fn sort(&self) -> Self
    where
        K: Clone,
        V: Clone + Display,
    {
        let mut keyed: Vec<(String, K, V)> = self
            .entries
            .iter()
            .map(|(key, value)| (value.to_string(), key.clone(), value.clone()))
            .collect();
        keyed.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        tracing::debug!(len = keyed.len(), "Sorted map by display order");
        keyed
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .collect()
    }

    /// A new map sorted with `compare(value_a, value_b, key_a, key_b)`.
    ///
    /// The receiver is left untouched, and the sort is not guaranteed to be
    /// stable.
    pub fn sort_by<F>(&self, mut compare: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_unstable_by(|key_a, value_a, key_b, value_b| {
            compare(value_a, value_b, key_a, key_b)
        });
        tracing::debug!(len = entries.len(), "Sorted map by comparator");
        Self::from(entries)
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Call [`Deletable::delete`] on every value that supports it, in order.
    ///
    /// Returns the values the delete was invoked on. Whatever the deletes
    /// produce is dropped without being awaited. Values without the capability
    /// are skipped.
    pub fn delete_all(&self) -> Vec<&V>
    where
        V: Deletable,
    {
        let deleted: Vec<&V> = self
            .entries
            .values()
            .filter(|value| value.delete().is_some())
            .collect();
        tracing::debug!(
            deleted = deleted.len(),
            skipped = self.len() - deleted.len(),
            "Deleted values"
        );
        deleted
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other, |_| false)
    }
}

impl<K: Hash + Eq, V: Eq> Eq for OrderedMap<K, V> {}
