//! Search specifiers for [`OrderedMap::find`](crate::OrderedMap::find) and
//! [`OrderedMap::find_key`](crate::OrderedMap::find_key).

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::{Error, OrderedMap, Result};

/// Predicate invoked with `(value, key, map)` for every entry in order.
pub type Predicate<'a, K, V> = Box<dyn FnMut(&V, &K, &OrderedMap<K, V>) -> bool + 'a>;

/// How a single-result search selects its match.
///
/// # Examples
///
/// ```
/// use collection::{OrderedMap, Search};
/// use serde_json::{Value, json};
///
/// let mut users: OrderedMap<u64, Value> = OrderedMap::new();
/// users.set(1, json!({"username": "alice"}));
/// users.set(2, json!({"username": "bob"}));
///
/// let by_name = users.find(Search::property("username", json!("bob"))).unwrap();
/// assert_eq!(by_name, users.get(&2));
///
/// let by_key = users.find_key(Search::predicate(|_, key: &u64, _| *key > 1)).unwrap();
/// assert_eq!(by_key, Some(&2));
/// ```
pub enum Search<'a, K, V> {
    /// Match the first value whose named property equals `value`.
    ///
    /// `value` is required; `None` makes the search fail with
    /// [`Error::MissingRequiredValue`].
    Property {
        name: Cow<'a, str>,
        value: Option<Value>,
    },

    /// Match the first entry accepted by the predicate.
    Predicate(Predicate<'a, K, V>),
}

impl<'a, K, V> Search<'a, K, V> {
    /// Search by comparing a named property against `value`.
    pub fn property(name: impl Into<Cow<'a, str>>, value: impl Into<Option<Value>>) -> Self {
        Search::Property {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Search with a predicate over `(value, key, map)`.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: FnMut(&V, &K, &OrderedMap<K, V>) -> bool + 'a,
    {
        Search::Predicate(Box::new(predicate))
    }

    /// Build a property search from an untyped specifier.
    ///
    /// Only a JSON string names a property; anything else is rejected with
    /// [`Error::InvalidArgumentType`]. Predicates cannot be expressed as JSON and
    /// must be built with [`Search::predicate`].
    pub fn from_json(search: &Value, value: impl Into<Option<Value>>) -> Result<Self> {
        match search {
            Value::String(name) => Ok(Search::Property {
                name: Cow::Owned(name.clone()),
                value: value.into(),
            }),
            _ => Err(Error::InvalidArgumentType {
                argument: "search",
                reason: "first argument must be a property name or a function".to_string(),
            }),
        }
    }
}

impl<K, V> fmt::Debug for Search<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Search::Property { name, value } => f
                .debug_struct("Property")
                .field("name", name)
                .field("value", value)
                .finish(),
            Search::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
