//! rexcsv: regex capture groups from stdin, appended as CSV rows
//!
//! rexcsv reads all of standard input, repairs a small set of known
//! mojibake sequences, applies a configured regular expression (with
//! dot-matches-newline semantics), and appends the capture groups of the
//! first match as one row to a CSV file. The header row is written once,
//! when the output file is first created.
//!
//! # Pipeline
//!
//! - **Config**: loads `regexPattern` and `headers` from a JSON file
//! - **Decoder**: slurps stdin; fixes five known double-encoded UTF-8 artifacts
//! - **Extractor**: first regex match only; trims and flattens each group
//! - **Appender**: append-mode CSV write, header-once on file creation
//!
//! # Example Usage
//!
//! ```no_run
//! use rexcsv::{config::load_config, pipeline};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.json")).unwrap();
//! let outcome = pipeline::run(
//!     "Name: Alice, Age: 30",
//!     &config,
//!     Path::new("output.csv"),
//!     false,
//! )
//! .unwrap();
//!
//! println!("{:?}", outcome);
//! ```

pub mod cli;
pub mod config;
pub mod decode;
pub mod extract;
pub mod html;
pub mod output;
pub mod pipeline;
pub mod writer;

// Re-export commonly used types
pub use config::ExtractConfig;
pub use pipeline::Outcome;
