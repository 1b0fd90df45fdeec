//!
//! Collection: an insertion-ordered map with cached views and collection helpers.
//!
//! ## Core Concepts
//!
//! * **OrderedMap (`map::OrderedMap`)**: A unique-key map that iterates in insertion order. Keys and values
//!   can be materialized into cached slices that are rebuilt lazily after any mutation.
//! * **Positional access**: `first`, `last` and `random` (and their `*_key` and counted `*_n` forms).
//!   Counts are validated through the `CountArg` trait, which also accepts untyped JSON input.
//! * **Search (`search::Search`)**: Single-result lookups by named property or by predicate. Values expose
//!   named properties through the `Properties` trait.
//! * **Transforms**: `filter`, `map`, `some`, `every`, `reduce` and `fold`, with callbacks receiving
//!   `(value, key, map)`.
//! * **Structural operations**: `concat`, `delete_all` (over values implementing `Deletable`), `equals`
//!   (where `Absent` values match missing keys) and non-mutating `sort`.
//!
//! The type is single-threaded and synchronous. No operation blocks or yields.

pub mod absent;
pub mod count;
pub mod deletable;
pub mod errors;
pub mod map;
pub mod property;
pub mod search;

pub use absent::Absent;
pub use count::CountArg;
pub use deletable::Deletable;
pub use errors::Error;
pub use map::OrderedMap;
pub use property::Properties;
pub use search::Search;

/// Result type used throughout the collection library.
pub type Result<T> = std::result::Result<T, Error>;
