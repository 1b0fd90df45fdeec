//! Error types for collection operations.
//!
//! Every error is raised synchronously by the call that received the offending
//! argument. Lookup misses and empty-map queries are not errors; those return
//! `None` or an empty sequence instead.

use thiserror::Error;

/// Structured error types for [`OrderedMap`](crate::OrderedMap) operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument had the wrong type, e.g. a non-numeric count or a search
    /// specifier that is neither a property name nor a predicate
    #[error("Invalid argument type for '{argument}': {reason}")]
    InvalidArgumentType {
        argument: &'static str,
        reason: String,
    },

    /// A numeric argument was outside its accepted range
    #[error("Invalid argument range for '{argument}': {reason}")]
    InvalidArgumentRange {
        argument: &'static str,
        reason: String,
    },

    /// A value comparison was requested without a value to compare against
    #[error("Operation '{operation}' requires a value to compare against")]
    MissingRequiredValue { operation: &'static str },
}

impl Error {
    /// Check if this error reports an argument of the wrong type
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::InvalidArgumentType { .. })
    }

    /// Check if this error reports an argument outside its range
    pub fn is_range_error(&self) -> bool {
        matches!(self, Error::InvalidArgumentRange { .. })
    }

    /// Check if this error reports a missing comparison value
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Error::MissingRequiredValue { .. })
    }

    /// Get the argument name if this is an argument validation error
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Error::InvalidArgumentType { argument, .. }
            | Error::InvalidArgumentRange { argument, .. } => Some(argument),
            Error::MissingRequiredValue { .. } => None,
        }
    }

    /// Get the operation name if this is a missing value error
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::MissingRequiredValue { operation } => Some(operation),
            _ => None,
        }
    }
}
