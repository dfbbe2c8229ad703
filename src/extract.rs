//! Regex matching and capture-group extraction

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Compile a pattern with dot-matches-newline enabled
///
/// `.` matching `\n` lets a single capture group span multiple lines of
/// input, which is the normal case for multi-line records.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .build()
        .with_context(|| format!("Invalid regex pattern {:?}", pattern))
}

/// Extract one record from the first match of `regex` in `text`
///
/// Returns `None` when the pattern does not match; a non-match is not an
/// error. On a match, returns one field per capture group (1-indexed, in
/// order), each normalized by [`normalize_field`]. A group that did not
/// participate in the match becomes an empty field. A pattern with zero
/// capture groups yields an empty record.
pub fn extract_record(regex: &Regex, text: &str) -> Option<Vec<String>> {
    let captures = regex.captures(text)?;

    let record = (1..captures.len())
        .map(|i| {
            captures
                .get(i)
                .map(|m| normalize_field(m.as_str()))
                .unwrap_or_default()
        })
        .collect();

    Some(record)
}

/// Trim surrounding whitespace and flatten internal newlines to spaces
///
/// Each `\n` becomes exactly one space; runs of newlines are not collapsed.
fn normalize_field(raw: &str) -> String {
    raw.trim().replace('\n', " ")
}
