//! The extraction pipeline: decode, match, extract, append
//!
//! One linear pass per invocation. All paths come in as explicit
//! parameters so tests can run against temp directories instead of the
//! process working directory.

use anyhow::Result;
use std::path::Path;

use crate::config::ExtractConfig;
use crate::decode;
use crate::extract;
use crate::html;
use crate::writer;

/// Result of one pipeline pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The pattern matched; one row was appended to the output file.
    Appended { fields: usize },
    /// The pattern did not match; the output file was not touched.
    NoMatch,
}

/// Run one extraction pass over `input`
///
/// Applies HTML stripping (when requested) and mojibake repair, searches
/// for the first match of the configured pattern, and appends the capture
/// groups as a CSV row. A non-match is a silent no-op, not an error; every
/// other failure propagates.
pub fn run(
    input: &str,
    config: &ExtractConfig,
    output_path: &Path,
    strip_html: bool,
) -> Result<Outcome> {
    let regex = extract::compile_pattern(&config.regex_pattern)?;

    let group_count = regex.captures_len() - 1;
    if config.headers.len() != group_count {
        log::warn!(
            "Config has {} header(s) but the pattern has {} capture group(s); \
             rows will not line up with the header row",
            config.headers.len(),
            group_count
        );
    }

    let stripped;
    let input = if strip_html {
        stripped = html::html_to_text(input);
        stripped.as_str()
    } else {
        input
    };

    let decoded = decode::repair_encoding(input);

    let Some(record) = extract::extract_record(&regex, &decoded) else {
        log::info!("Pattern did not match; output file left untouched");
        return Ok(Outcome::NoMatch);
    };

    writer::append_record(output_path, &config.headers, &record)?;

    Ok(Outcome::Appended {
        fields: record.len(),
    })
}
