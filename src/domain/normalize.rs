//! Line normalization: drops blank and comment lines, strips trailing
//! comments and, in the strict dialect, interior whitespace.

use crate::domain::options::WhitespaceMode;

pub const COMMENT_MARKER: char = ';';

/// Normalize raw file content into the ordered sequence of meaningful lines.
///
/// Lines that are empty, or start with `;` or a space, are discarded whole.
/// Indented lines are therefore ignored, as the format has always done.
pub fn normalize_lines(content: &str, mode: WhitespaceMode) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| normalize_line(line, mode))
        .collect()
}

/// Normalize a single physical line, returning `None` if nothing remains.
pub fn normalize_line(line: &str, mode: WhitespaceMode) -> Option<String> {
    match line.chars().next() {
        None | Some(COMMENT_MARKER) | Some(' ') => return None,
        Some(_) => {}
    }

    let body = match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    };

    let cleaned: String = match mode {
        WhitespaceMode::Strip => body.chars().filter(|c| !matches!(c, ' ' | '\t')).collect(),
        WhitespaceMode::Preserve => body.to_string(),
    };

    if cleaned.trim().is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
