//! Read-only store of parsed entries with typed accessors.

use std::fmt;

use crate::domain::entry_table::{build_entries, EntryTable};
use crate::domain::error::ConfigError;
use crate::domain::normalize::normalize_lines;
use crate::domain::options::ParseOptions;
use crate::domain::value::FromRawValue;
use crate::ports::config_port::ConfigPort;

/// Parsed configuration. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    entries: EntryTable,
}

impl ConfigStore {
    /// Parse in-memory text with the default (strict) options.
    pub fn from_string(content: &str) -> Self {
        Self::parse(content, &ParseOptions::default())
    }

    pub fn parse(content: &str, options: &ParseOptions) -> Self {
        let lines = normalize_lines(content, options.whitespace);
        Self {
            entries: build_entries(&lines, &options.section_keyword),
        }
    }

    /// Look up `key` and convert the raw value to `T`.
    ///
    /// Integer types refuse keys containing `.`, so section-qualified
    /// integers must be read as `String` or a float and converted by the caller.
    pub fn get<T: FromRawValue>(&self, key: &str) -> Result<T, ConfigError> {
        let raw = self.entries.get(key).ok_or_else(|| ConfigError::NotFound {
            key: key.to_string(),
        })?;
        T::from_raw(key, raw)
    }

    /// Like [`get`](Self::get), falling back to `default` on any error.
    pub fn get_or<T: FromRawValue>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<EntryTable> for ConfigStore {
    fn from(entries: EntryTable) -> Self {
        Self { entries }
    }
}

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.entries() {
            writeln!(f, "{key} : {value}")?;
        }
        Ok(())
    }
}

impl ConfigPort for ConfigStore {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key)
    }

    fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        self.get(key)
    }

    fn get_double(&self, key: &str) -> Result<f64, ConfigError> {
        self.get(key)
    }
}
