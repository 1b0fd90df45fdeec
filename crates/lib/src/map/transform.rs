//! Filtering, mapping, quantifiers and folds over entries in order.
//!
//! Every callback receives `(value, key, map)`. Callers that need extra context
//! capture it in the closure.

use std::hash::Hash;

use super::OrderedMap;

impl<K, V> OrderedMap<K, V> {
    /// A new map holding the entries accepted by `predicate`, in order.
    ///
    /// The receiver is left untouched.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        K: Hash + Eq + Clone,
        V: Clone,
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.entries
            .iter()
            .filter(|(key, value)| predicate(*value, *key, self))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// The values accepted by `predicate`, in order.
    pub fn filter_to_vec<F>(&self, mut predicate: F) -> Vec<&V>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.entries
            .iter()
            .filter(|(key, value)| predicate(*value, *key, self))
            .map(|(_, value)| value)
            .collect()
    }

    /// `mapper(value, key, map)` for every entry, in order.
    pub fn map<T, F>(&self, mut mapper: F) -> Vec<T>
    where
        F: FnMut(&V, &K, &Self) -> T,
    {
        self.entries
            .iter()
            .map(|(key, value)| mapper(value, key, self))
            .collect()
    }

    /// Whether `predicate` accepts at least one entry. Stops at the first match.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.entries
            .iter()
            .any(|(key, value)| predicate(value, key, self))
    }

    /// Whether `predicate` accepts every entry. Stops at the first rejection.
    ///
    /// Trivially true for an empty map.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.entries
            .iter()
            .all(|(key, value)| predicate(value, key, self))
    }

    /// Left fold seeded with the first value.
    ///
    /// Folding starts at the second entry. Returns `None` for an empty map, and
    /// the first value unchanged for a single-entry map.
    pub fn reduce<F>(&self, mut reducer: F) -> Option<V>
    where
        V: Clone,
        F: FnMut(V, &V, &K, &Self) -> V,
    {
        let mut entries = self.entries.iter();
        let (_, seed) = entries.next()?;
        Some(entries.fold(seed.clone(), |accumulator, (key, value)| {
            reducer(accumulator, value, key, self)
        }))
    }

    /// Left fold over every entry starting from `initial`.
    pub fn fold<T, F>(&self, initial: T, mut reducer: F) -> T
    where
        F: FnMut(T, &V, &K, &Self) -> T,
    {
        self.entries
            .iter()
            .fold(initial, |accumulator, (key, value)| {
                reducer(accumulator, value, key, self)
            })
    }
}
