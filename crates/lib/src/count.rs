//! Count arguments for the counted positional operations.
//!
//! `first_n`, `last_n`, `random_n` and their key-returning counterparts accept a
//! count from typed integers, floats, or untyped JSON input. Every source is
//! validated the same way: the count must be a number, and it must be an integer
//! greater than zero.

use serde_json::Value;

use crate::{Error, Result};

const ARGUMENT: &str = "count";

/// A value that can be validated into an element count.
///
/// # Examples
///
/// ```
/// use collection::CountArg;
/// use serde_json::json;
///
/// assert_eq!(3u32.into_count().unwrap(), 3);
/// assert_eq!(2.0f64.into_count().unwrap(), 2);
/// assert!(1.5f64.into_count().unwrap_err().is_range_error());
/// assert!(json!("x").into_count().unwrap_err().is_type_error());
/// ```
pub trait CountArg {
    /// Validate this argument and convert it into a count of at least one.
    fn into_count(self) -> Result<usize>;
}

fn out_of_range(shown: impl std::fmt::Display) -> Error {
    Error::InvalidArgumentRange {
        argument: ARGUMENT,
        reason: format!("the count must be an integer greater than 0, got {shown}"),
    }
}

fn not_a_number(shown: impl std::fmt::Display) -> Error {
    Error::InvalidArgumentType {
        argument: ARGUMENT,
        reason: format!("the count must be a number, got {shown}"),
    }
}

macro_rules! impl_count_unsigned {
    ($($ty:ty),*) => {$(
        impl CountArg for $ty {
            fn into_count(self) -> Result<usize> {
                if self == 0 {
                    return Err(out_of_range(self));
                }
                Ok(usize::try_from(self).unwrap_or(usize::MAX))
            }
        }
    )*};
}

macro_rules! impl_count_signed {
    ($($ty:ty),*) => {$(
        impl CountArg for $ty {
            fn into_count(self) -> Result<usize> {
                if self < 1 {
                    return Err(out_of_range(self));
                }
                Ok(usize::try_from(self).unwrap_or(usize::MAX))
            }
        }
    )*};
}

impl_count_unsigned!(u8, u16, u32, u64, u128, usize);
impl_count_signed!(i8, i16, i32, i64, i128, isize);

impl CountArg for f64 {
    fn into_count(self) -> Result<usize> {
        // NaN is still a number here, so it is a range failure, not a type failure
        if !self.is_finite() || self.fract() != 0.0 || self < 1.0 {
            return Err(out_of_range(self));
        }
        // Saturating cast; counts are clamped to the map size afterwards anyway
        Ok(self as usize)
    }
}

impl CountArg for f32 {
    fn into_count(self) -> Result<usize> {
        f64::from(self).into_count()
    }
}

impl CountArg for &Value {
    fn into_count(self) -> Result<usize> {
        match self {
            Value::Number(number) => {
                if let Some(n) = number.as_u64() {
                    n.into_count()
                } else if let Some(n) = number.as_i64() {
                    n.into_count()
                } else {
                    number.as_f64().unwrap_or(f64::NAN).into_count()
                }
            }
            other => Err(not_a_number(other)),
        }
    }
}

impl CountArg for Value {
    fn into_count(self) -> Result<usize> {
        (&self).into_count()
    }
}
