//! Extraction configuration loaded from a JSON file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extraction configuration
///
/// The JSON file uses camelCase keys, matching the external interface:
///
/// ```json
/// { "regexPattern": "Name: (\\w+), Age: (\\d+)",
///   "headers": ["Name", "Age"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractConfig {
    /// Regular expression applied to the decoded input.
    /// Compiled with dot-matches-newline, so groups may span lines.
    pub regex_pattern: String,

    /// CSV column names, written once when the output file is created.
    /// Should have one entry per capture group; this is not enforced.
    pub headers: Vec<String>,
}

/// Load extraction config from a JSON file
///
/// Missing file, malformed JSON, and missing required keys are all fatal.
pub fn load_config(path: &Path) -> Result<ExtractConfig> {
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: ExtractConfig = serde_json::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    log::debug!(
        "Loaded config from {}: {} header(s), pattern {:?}",
        path.display(),
        config.headers.len(),
        config.regex_pattern
    );

    Ok(config)
}
