//! On-demand conversion of raw values to the closed set of supported types.

use std::num::IntErrorKind;

use crate::domain::entry_table::KEY_SEPARATOR;
use crate::domain::error::ConfigError;

mod sealed {
    pub trait Sealed {}
}

/// Types a stored raw value can be converted into.
///
/// Sealed: implemented for `String`, `f32`, `f64`, `i32`, `i64`, `u32`,
/// `u64` and `usize` only.
pub trait FromRawValue: sealed::Sealed + Sized {
    fn from_raw(key: &str, raw: &str) -> Result<Self, ConfigError>;
}

impl sealed::Sealed for String {}

impl FromRawValue for String {
    fn from_raw(_key: &str, raw: &str) -> Result<Self, ConfigError> {
        Ok(raw.to_string())
    }
}

fn is_explicit_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! impl_float {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl FromRawValue for $ty {
            fn from_raw(key: &str, raw: &str) -> Result<Self, ConfigError> {
                let text = raw.trim();
                let value = text.parse::<$ty>().map_err(|e| ConfigError::Parse {
                    key: key.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                })?;
                if value.is_infinite() && !is_explicit_infinity(text) {
                    return Err(ConfigError::Range {
                        key: key.to_string(),
                        value: raw.to_string(),
                    });
                }
                Ok(value)
            }
        }
    )*};
}

// Integer lookups reject section-qualified keys; only keys without a `.`
// reach the parser.
macro_rules! impl_int {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl FromRawValue for $ty {
            fn from_raw(key: &str, raw: &str) -> Result<Self, ConfigError> {
                if key.contains(KEY_SEPARATOR) {
                    return Err(ConfigError::InvalidRequest {
                        key: key.to_string(),
                        reason: "integer lookup does not accept a section-qualified key"
                            .to_string(),
                    });
                }
                raw.trim().parse::<$ty>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConfigError::Range {
                        key: key.to_string(),
                        value: raw.to_string(),
                    },
                    _ => ConfigError::Parse {
                        key: key.to_string(),
                        value: raw.to_string(),
                        reason: e.to_string(),
                    },
                })
            }
        }
    )*};
}

impl_float!(f32, f64);
impl_int!(i32, i64, u32, u64, usize);
