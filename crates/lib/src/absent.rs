//! Absent-value capability used by [`OrderedMap::equals`](crate::OrderedMap::equals).
//!
//! A map can hold a key whose value stands for "nothing", like `None`. When
//! comparing maps, such an entry in `self` matches a key that `other` does not
//! hold at all.

use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

/// A value that may stand for "no value".
///
/// Only `Option<T>` overrides the default: `None` is absent. Other types opt in
/// with an empty impl.
///
/// # Examples
///
/// ```
/// use collection::{Absent, OrderedMap};
///
/// #[derive(PartialEq)]
/// struct Role(&'static str);
///
/// impl Absent for Role {}
///
/// let left = OrderedMap::from([("a", Some(1)), ("b", None)]);
/// let right = OrderedMap::from([("a", Some(1)), ("c", None)]);
/// assert!(left.equals(Some(&right)));
///
/// let roles = OrderedMap::from([(1, Role("admin"))]);
/// assert!(roles.equals(Some(&roles)));
/// ```
pub trait Absent {
    /// Whether this value stands for "no value".
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_absent {
    ($($ty:ty),*) => {$(
        impl Absent for $ty {}
    )*};
}

never_absent!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, ()
);

// JSON `null` is a value, not a missing one.
impl Absent for Value {}

impl<T> Absent for Vec<T> {}

macro_rules! forward_absent {
    ($($ptr:ty),*) => {$(
        impl<T: Absent + ?Sized> Absent for $ptr {
            fn is_absent(&self) -> bool {
                (**self).is_absent()
            }
        }
    )*};
}

forward_absent!(&T, Box<T>, Rc<T>, Arc<T>);
