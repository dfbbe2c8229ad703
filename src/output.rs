//! User-facing error output for the binary boundary
//!
//! Failures surface to the terminal once, in red, without internal logging
//! noise (timestamps, log levels, crate names). Everything else goes
//! through the `log` macros.

use owo_colors::OwoColorize;

/// Display an error message to the user in red with padding
///
/// Format: blank line + red message + blank line
///
/// # Example
/// ```ignore
/// output::error("Error: Failed to read config file config.json");
/// ```
pub fn error(message: &str) {
    eprintln!("\n{}\n", message.red());
}
