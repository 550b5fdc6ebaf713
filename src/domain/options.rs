//! Parse options: whitespace dialect and section keyword.

/// Default token marking a section header line.
pub const DEFAULT_SECTION_KEYWORD: &str = "Section";

/// How interior spaces are treated during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceMode {
    /// Remove every space so `key = value` reads as `key=value`.
    #[default]
    Strip,
    /// Keep spaces as written. `key = value` yields key `"key "`.
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub whitespace: WhitespaceMode,
    pub section_keyword: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            whitespace: WhitespaceMode::default(),
            section_keyword: DEFAULT_SECTION_KEYWORD.to_string(),
        }
    }
}

impl ParseOptions {
    pub fn loose() -> Self {
        Self {
            whitespace: WhitespaceMode::Preserve,
            ..Self::default()
        }
    }

    pub fn with_section_keyword(mut self, keyword: &str) -> Self {
        self.section_keyword = keyword.to_string();
        self
    }
}
