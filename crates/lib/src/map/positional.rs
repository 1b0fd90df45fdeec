//! First, last and random access by position.
//!
//! The single-element forms return `None` on an empty map. The counted forms
//! validate the count first (see [`CountArg`]) and clamp it to the map size.
//! `first` reads straight from the live entries; `last` and `random` read
//! through the cached views.

use rand::Rng;
use rand::seq::SliceRandom;

use super::OrderedMap;
use crate::{CountArg, Result};

impl<K, V> OrderedMap<K, V> {
    /// The first value, or `None` if the map is empty.
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Up to `count` values from the front, in order.
    pub fn first_n(&self, count: impl CountArg) -> Result<Vec<&V>> {
        let count = count.into_count()?;
        Ok(self.entries.values().take(count).collect())
    }

    /// The first key, or `None` if the map is empty.
    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    /// Up to `count` keys from the front, in order.
    pub fn first_key_n(&self, count: impl CountArg) -> Result<Vec<&K>> {
        let count = count.into_count()?;
        Ok(self.entries.keys().take(count).collect())
    }

    /// The last value, or `None` if the map is empty.
    pub fn last(&self) -> Option<&V>
    where
        V: Clone,
    {
        self.values().last()
    }

    /// Up to `count` values from the back, in their original order.
    pub fn last_n(&self, count: impl CountArg) -> Result<&[V]>
    where
        V: Clone,
    {
        let count = count.into_count()?;
        Ok(tail(self.values(), count))
    }

    /// The last key, or `None` if the map is empty.
    pub fn last_key(&self) -> Option<&K>
    where
        K: Clone,
    {
        self.keys().last()
    }

    /// Up to `count` keys from the back, in their original order.
    pub fn last_key_n(&self, count: impl CountArg) -> Result<&[K]>
    where
        K: Clone,
    {
        let count = count.into_count()?;
        Ok(tail(self.keys(), count))
    }

    /// A uniformly chosen value, or `None` if the map is empty.
    pub fn random(&self) -> Option<&V>
    where
        V: Clone,
    {
        self.random_with(&mut rand::thread_rng())
    }

    /// Like [`OrderedMap::random`], drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&V>
    where
        V: Clone,
    {
        self.values().choose(rng)
    }

    /// Up to `count` distinct values sampled without replacement, in draw order.
    ///
    /// An empty map yields an empty vector rather than `None`.
    pub fn random_n(&self, count: impl CountArg) -> Result<Vec<&V>>
    where
        V: Clone,
    {
        self.random_n_with(count, &mut rand::thread_rng())
    }

    /// Like [`OrderedMap::random_n`], drawing from `rng`.
    pub fn random_n_with<R: Rng + ?Sized>(
        &self,
        count: impl CountArg,
        rng: &mut R,
    ) -> Result<Vec<&V>>
    where
        V: Clone,
    {
        let count = count.into_count()?;
        Ok(sample(self.values(), count, rng))
    }

    /// A uniformly chosen key, or `None` if the map is empty.
    pub fn random_key(&self) -> Option<&K>
    where
        K: Clone,
    {
        self.random_key_with(&mut rand::thread_rng())
    }

    /// Like [`OrderedMap::random_key`], drawing from `rng`.
    pub fn random_key_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&K>
    where
        K: Clone,
    {
        self.keys().choose(rng)
    }

    /// Up to `count` distinct keys sampled without replacement, in draw order.
    pub fn random_key_n(&self, count: impl CountArg) -> Result<Vec<&K>>
    where
        K: Clone,
    {
        self.random_key_n_with(count, &mut rand::thread_rng())
    }

    /// Like [`OrderedMap::random_key_n`], drawing from `rng`.
    pub fn random_key_n_with<R: Rng + ?Sized>(
        &self,
        count: impl CountArg,
        rng: &mut R,
    ) -> Result<Vec<&K>>
    where
        K: Clone,
    {
        let count = count.into_count()?;
        Ok(sample(self.keys(), count, rng))
    }
}

fn tail<T>(items: &[T], count: usize) -> &[T] {
    &items[items.len().saturating_sub(count)..]
}

/// Draw `count` items one at a time, each uniformly from those not yet drawn.
fn sample<'a, T, R: Rng + ?Sized>(items: &'a [T], count: usize, rng: &mut R) -> Vec<&'a T> {
    let mut pool: Vec<&T> = items.iter().collect();
    let count = count.min(pool.len());
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.gen_range(0..pool.len());
        drawn.push(pool.remove(index));
    }
    drawn
}
