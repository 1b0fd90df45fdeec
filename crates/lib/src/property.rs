//! Named property access for property-based searches.
//!
//! `find_all`, `find`, `find_key` and `exists` can match values by comparing one
//! of their named properties against a probe value. Values opt into this by
//! implementing [`Properties`]. Property values are exposed as
//! [`serde_json::Value`] and compared with `==`, with no coercion between types
//! (`1` never equals `"1"`).
//!
//! A property can be *own* (stored on the value itself) or derived, e.g. a
//! computed field or a fallback shared by every value of a type. Only `find_key`
//! distinguishes the two: it skips values that do not own the probed property.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Read access to the named properties of a value.
///
/// # Examples
///
/// ```
/// use collection::Properties;
/// use serde_json::{Value, json};
///
/// struct Member {
///     name: String,
///     role: Option<String>,
/// }
///
/// impl Properties for Member {
///     fn property(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(json!(self.name)),
///             // Members without an explicit role fall back to "member"
///             "role" => Some(json!(self.role.as_deref().unwrap_or("member"))),
///             _ => None,
///         }
///     }
///
///     fn has_own_property(&self, name: &str) -> bool {
///         match name {
///             "name" => true,
///             "role" => self.role.is_some(),
///             _ => false,
///         }
///     }
/// }
///
/// let bob = Member { name: "Bob".into(), role: None };
/// assert_eq!(bob.property("role"), Some(json!("member")));
/// assert!(!bob.has_own_property("role"));
/// ```
pub trait Properties {
    /// Look up a property by name, including derived properties.
    ///
    /// Returns `None` when the value has no such property at all.
    fn property(&self, name: &str) -> Option<Value>;

    /// Like [`Properties::property`], but may borrow the property instead of
    /// building an owned copy.
    ///
    /// Searches compare through this method. The default wraps `property`;
    /// override it when the property is stored on the value.
    fn property_ref(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.property(name).map(Cow::Owned)
    }

    /// Whether the value itself holds the named property.
    ///
    /// The default treats every readable property as an own property.
    fn has_own_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}

/// JSON objects expose their fields; every other JSON value has no properties.
impl Properties for Value {
    fn property(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|object| object.property(name))
    }

    fn property_ref(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.as_object().and_then(|object| object.property_ref(name))
    }

    fn has_own_property(&self, name: &str) -> bool {
        self.as_object()
            .is_some_and(|object| object.contains_key(name))
    }
}

impl Properties for Map<String, Value> {
    fn property(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn property_ref(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }

    fn has_own_property(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

macro_rules! forward_properties {
    ($($ptr:ty),*) => {$(
        impl<T: Properties + ?Sized> Properties for $ptr {
            fn property(&self, name: &str) -> Option<Value> {
                (**self).property(name)
            }

            fn property_ref(&self, name: &str) -> Option<Cow<'_, Value>> {
                (**self).property_ref(name)
            }

            fn has_own_property(&self, name: &str) -> bool {
                (**self).has_own_property(name)
            }
        }
    )*};
}

forward_properties!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
