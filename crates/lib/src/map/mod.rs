//! Insertion-ordered map with cached key and value views.
//!
//! [`OrderedMap`] wraps an [`IndexMap`] and layers collection helpers on top of
//! the plain mapping operations: positional access, random sampling, property
//! and predicate search, filtering and mapping, merging, bulk delete, structural
//! equality and sorting.
//!
//! # Ordering
//!
//! Iteration order is insertion order. Setting an existing key updates its value
//! in place without moving it; deleting a key and setting it again moves it to
//! the end. Building a map from a sequence of pairs follows the same rule, so a
//! duplicate key keeps the position of its first occurrence and the value of its
//! last.
//!
//! # Cached views
//!
//! [`OrderedMap::values`] and [`OrderedMap::keys`] materialize the values and
//! keys into slices that are built lazily on first read and reused until the map
//! is mutated. Every mutating method resets both caches, so a returned slice is
//! never stale: the borrow checker keeps the slice alive only while the map is
//! not being mutated.
//!
//! ```
//! use collection::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set("a", 1).set("b", 2);
//!
//! let first = map.values().as_ptr();
//! assert_eq!(map.values(), &[1, 2]);
//! assert_eq!(map.values().as_ptr(), first); // same cached slice
//!
//! map.set("c", 3);
//! assert_eq!(map.values(), &[1, 2, 3]);
//! ```

mod positional;
mod search;
mod serialization;
mod structural;
mod transform;

use std::cell::OnceCell;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use indexmap::{Equivalent, IndexMap};

/// An insertion-ordered map with cached key/value views and collection helpers.
///
/// Not thread-safe: the caches use single-threaded interior mutability, so an
/// `OrderedMap` can be moved between threads but not shared across them.
pub struct OrderedMap<K, V> {
    entries: IndexMap<K, V>,
    value_cache: OnceCell<Vec<V>>,
    key_cache: OnceCell<Vec<K>>,
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::from_index_map(IndexMap::new())
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_index_map(IndexMap::with_capacity(capacity))
    }

    fn from_index_map(entries: IndexMap<K, V>) -> Self {
        Self {
            entries,
            value_cache: OnceCell::new(),
            key_cache: OnceCell::new(),
        }
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterate over the keys in order without materializing them.
    pub fn iter_keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterate over the values in order without materializing them.
    pub fn iter_values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Iterate over `(key, value)` pairs with mutable access to the values.
    ///
    /// Resets the value cache.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, K, V> {
        self.value_cache.take();
        self.entries.iter_mut()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.invalidate();
        self.entries.clear();
    }

    /// Read-only access to the underlying [`IndexMap`].
    pub fn as_index_map(&self) -> &IndexMap<K, V> {
        &self.entries
    }

    /// Consume the map, returning the underlying [`IndexMap`].
    pub fn into_index_map(self) -> IndexMap<K, V> {
        self.entries
    }

    /// Cached values in iteration order.
    ///
    /// The slice is built on first read and returned as-is by later reads until
    /// the map is mutated. Building it clones every value, so for large values
    /// that change often prefer [`OrderedMap::iter_values`], or store them as
    /// `Rc<V>` to make the clone a reference-count bump.
    pub fn values(&self) -> &[V]
    where
        V: Clone,
    {
        let values = self.value_cache.get_or_init(|| {
            tracing::trace!(cache = "values", len = self.entries.len(), "Rebuilding cache");
            self.entries.values().cloned().collect()
        });
        debug_assert_eq!(values.len(), self.entries.len(), "value cache out of sync");
        values
    }

    /// Alias of [`OrderedMap::values`].
    pub fn value_array(&self) -> &[V]
    where
        V: Clone,
    {
        self.values()
    }

    /// Cached keys in iteration order.
    ///
    /// Same caching rules as [`OrderedMap::values`]: the rebuild clones every
    /// key, and [`OrderedMap::iter_keys`] avoids the copy.
    pub fn keys(&self) -> &[K]
    where
        K: Clone,
    {
        let keys = self.key_cache.get_or_init(|| {
            tracing::trace!(cache = "keys", len = self.entries.len(), "Rebuilding cache");
            self.entries.keys().cloned().collect()
        });
        debug_assert_eq!(keys.len(), self.entries.len(), "key cache out of sync");
        keys
    }

    /// Call `f` with `(value, key, map)` for every entry in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in &self.entries {
            f(value, key, self);
        }
    }

    fn invalidate(&mut self) {
        self.value_cache.take();
        self.key_cache.take();
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Insert or update an entry, returning the map for chaining.
    ///
    /// An existing key keeps its position.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.invalidate();
        self.entries.insert(key, value);
        self
    }

    /// Remove an entry, returning whether one was present.
    ///
    /// The remaining entries keep their relative order.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.invalidate();
        self.entries.shift_remove(key).is_some()
    }

    /// Look up a value by key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get(key)
    }

    /// Look up a value by key for modification.
    ///
    /// Resets the value cache.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.value_cache.take();
        self.entries.get_mut(key)
    }

    /// Whether the map holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.contains_key(key)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K, V, Q> Index<&Q> for OrderedMap<K, V>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K>,
{
    type Output = V;

    /// Panics if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        &self.entries[key]
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_index_map(IndexMap::from_iter(iter))
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}

impl<K, V> From<IndexMap<K, V>> for OrderedMap<K, V> {
    fn from(entries: IndexMap<K, V>) -> Self {
        Self::from_index_map(entries)
    }
}

impl<K, V> From<OrderedMap<K, V>> for IndexMap<K, V> {
    fn from(map: OrderedMap<K, V>) -> Self {
        map.entries
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
