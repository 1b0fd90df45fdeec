//! Property and predicate search.

use serde_json::Value;

use super::OrderedMap;
use crate::{Error, Properties, Result, Search};

fn property_equals<V: Properties>(item: &V, name: &str, value: &Value) -> bool {
    item.property_ref(name).is_some_and(|property| *property == *value)
}

fn require_value(value: Option<Value>, operation: &'static str) -> Result<Value> {
    value.ok_or(Error::MissingRequiredValue { operation })
}

impl<K, V> OrderedMap<K, V> {
    /// The first value accepted by `predicate(value, key, map)`.
    pub fn find_with<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.entries
            .iter()
            .find(|(key, value)| predicate(*value, *key, self))
            .map(|(_, value)| value)
    }

    /// The key of the first entry accepted by `predicate(value, key, map)`.
    pub fn find_key_with<F>(&self, mut predicate: F) -> Option<&K>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        self.entries
            .iter()
            .find(|(key, value)| predicate(*value, *key, self))
            .map(|(key, _)| key)
    }
}

impl<K, V> OrderedMap<K, V>
where
    V: Properties,
{
    /// Every value whose property `name` equals `value`, in order.
    ///
    /// Fails with [`Error::MissingRequiredValue`] if `value` is `None`.
    pub fn find_all(&self, name: &str, value: impl Into<Option<Value>>) -> Result<Vec<&V>> {
        let value = require_value(value.into(), "find_all")?;
        Ok(self
            .entries
            .values()
            .filter(|item| property_equals(*item, name, &value))
            .collect())
    }

    /// The first value matching `search`, or `None`.
    ///
    /// A property search compares [`Properties::property`], so derived
    /// properties can match.
    pub fn find(&self, search: Search<'_, K, V>) -> Result<Option<&V>> {
        match search {
            Search::Property { name, value } => {
                let value = require_value(value, "find")?;
                Ok(self
                    .entries
                    .values()
                    .find(|item| property_equals(*item, &name, &value)))
            }
            Search::Predicate(mut predicate) => {
                Ok(self.find_with(|v, k, map| predicate(v, k, map)))
            }
        }
    }

    /// The key of the first entry matching `search`, or `None`.
    ///
    /// Unlike [`OrderedMap::find`], a property search only considers values that
    /// hold the property themselves ([`Properties::has_own_property`]).
    pub fn find_key(&self, search: Search<'_, K, V>) -> Result<Option<&K>> {
        match search {
            Search::Property { name, value } => {
                let value = require_value(value, "find_key")?;
                Ok(self
                    .entries
                    .iter()
                    .filter(|(_, item)| item.has_own_property(&name))
                    .find(|(_, item)| property_equals(*item, &name, &value))
                    .map(|(key, _)| key))
            }
            Search::Predicate(mut predicate) => {
                Ok(self.find_key_with(|v, k, map| predicate(v, k, map)))
            }
        }
    }

    /// Whether any value's property `name` equals `value`.
    pub fn exists(&self, name: &str, value: impl Into<Option<Value>>) -> Result<bool> {
        let value = require_value(value.into(), "exists")?;
        Ok(self.find(Search::property(name, value))?.is_some())
    }
}
