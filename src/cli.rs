//! CLI argument parsing and execution

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config;
use crate::decode;
use crate::pipeline::{self, Outcome};

/// rexcsv: regex capture groups from stdin, appended as CSV rows
#[derive(Parser, Debug)]
#[command(
    name = "rexcsv",
    version,
    about = "Extract regex capture groups from stdin into CSV rows",
    long_about = "rexcsv reads all of standard input, applies the regular expression from \
                  the config file (dot matches newline, first match only), and appends the \
                  capture groups as one row to the output CSV file. The header row is \
                  written once, when the output file is first created.\n\n\
                  A non-matching input is not an error: nothing is written and rexcsv \
                  exits successfully."
)]
pub struct Cli {
    /// Path to the JSON config file ({"regexPattern": "...", "headers": [...]})
    #[arg(short, long, value_name = "PATH", default_value = "config.json")]
    pub config: PathBuf,

    /// Path to the output CSV file (created on first matching run)
    #[arg(short, long, value_name = "PATH", default_value = "output.csv")]
    pub output: PathBuf,

    /// Strip HTML markup from the input before matching
    #[arg(long)]
    pub strip_html: bool,

    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute one extraction pass
    pub fn execute(self) -> Result<()> {
        // Setup logging based on verbosity
        let log_level = match self.verbose {
            0 => "warn",  // Default: only warnings and errors
            1 => "info",  // -v: show info messages
            2 => "debug", // -vv: show debug messages
            _ => "trace", // -vvv: show trace messages
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        let config = config::load_config(&self.config)?;

        let input = decode::read_input(&mut std::io::stdin().lock())?;

        match pipeline::run(&input, &config, &self.output, self.strip_html)? {
            Outcome::Appended { fields } => {
                log::info!(
                    "Appended {} field(s) to {}",
                    fields,
                    self.output.display()
                );
            }
            Outcome::NoMatch => {}
        }

        Ok(())
    }
}
