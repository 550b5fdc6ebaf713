//! Entry table construction: classifies normalized lines as section headers
//! or `variable=value` pairs and builds the `section.variable` mapping.

use std::collections::BTreeMap;
use tracing::trace;

pub const KEY_SEPARATOR: char = '.';
pub const VALUE_MARKER: char = '=';

/// Flat mapping from composite key to raw string value.
pub type EntryTable = BTreeMap<String, String>;

/// Tracks the section that prefixes subsequent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCursor {
    current: String,
}

impl SectionCursor {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn enter(&mut self, section: &str) {
        self.current = section.to_string();
    }

    pub fn composite_key(&self, variable: &str) -> String {
        format!("{}{}{}", self.current, KEY_SEPARATOR, variable)
    }
}

/// Extract the section identifier from a line, if it carries the keyword.
///
/// The identifier is the keyword plus the run of alphanumeric, `_` or `-`
/// characters directly after it, so `[Section2]` yields `Section2`.
pub fn section_identifier<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    if keyword.is_empty() {
        return None;
    }
    let start = line.find(keyword)?;
    let suffix = &line[start + keyword.len()..];
    let suffix_len = suffix
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '-'))
        .map(|(i, _)| i)
        .unwrap_or(suffix.len());
    Some(&line[start..start + keyword.len() + suffix_len])
}

/// Split a line at the first `=`. A line without `=` is all variable.
pub fn split_assignment(line: &str) -> (&str, &str) {
    line.split_once(VALUE_MARKER).unwrap_or((line, ""))
}

/// Build the entry table from normalized lines. Later keys overwrite earlier ones.
pub fn build_entries<I, S>(lines: I, keyword: &str) -> EntryTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cursor = SectionCursor::default();
    let mut table = EntryTable::new();

    for line in lines {
        let line = line.as_ref();
        if let Some(section) = section_identifier(line, keyword) {
            cursor.enter(section);
            continue;
        }

        let (variable, value) = split_assignment(line);
        let key = cursor.composite_key(variable);
        if let Some(previous) = table.insert(key.clone(), value.to_string()) {
            trace!(key = %key, previous = %previous, value = %value, "overwriting entry");
        }
    }

    table
}
