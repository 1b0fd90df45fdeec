//! Delete capability used by [`OrderedMap::delete_all`](crate::OrderedMap::delete_all).

use std::rc::Rc;
use std::sync::Arc;

/// A value that may be able to delete itself.
///
/// `delete` returns `None` when this particular value has no delete capability;
/// `delete_all` skips such values silently. `Some(output)` means the delete was
/// invoked. The output is whatever the delete produces, e.g. a completion
/// handle; `delete_all` drops it without waiting on it.
///
/// # Examples
///
/// ```
/// use collection::{Deletable, OrderedMap};
/// use std::cell::Cell;
///
/// struct Message {
///     pinned: bool,
///     deleted: Cell<bool>,
/// }
///
/// impl Deletable for Message {
///     type Output = ();
///
///     fn delete(&self) -> Option<()> {
///         if self.pinned {
///             return None;
///         }
///         self.deleted.set(true);
///         Some(())
///     }
/// }
///
/// let mut messages = OrderedMap::new();
/// messages.set(1, Message { pinned: false, deleted: Cell::new(false) });
/// messages.set(2, Message { pinned: true, deleted: Cell::new(false) });
///
/// assert_eq!(messages.delete_all().len(), 1);
/// assert!(messages.get(&1).unwrap().deleted.get());
/// assert!(!messages.get(&2).unwrap().deleted.get());
/// ```
pub trait Deletable {
    /// Result of a delete that was invoked.
    type Output;

    /// Delete this value, or return `None` if it cannot be deleted.
    fn delete(&self) -> Option<Self::Output>;
}

macro_rules! forward_deletable {
    ($($ptr:ty),*) => {$(
        impl<T: Deletable + ?Sized> Deletable for $ptr {
            type Output = T::Output;

            fn delete(&self) -> Option<Self::Output> {
                (**self).delete()
            }
        }
    )*};
}

forward_deletable!(&T, Box<T>, Rc<T>, Arc<T>);
