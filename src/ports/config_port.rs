//! Configuration access port trait.

use crate::domain::error::ConfigError;

/// Typed read access to `section.variable` entries.
pub trait ConfigPort {
    fn get_string(&self, key: &str) -> Result<String, ConfigError>;
    fn get_int(&self, key: &str) -> Result<i64, ConfigError>;
    fn get_double(&self, key: &str) -> Result<f64, ConfigError>;
}
