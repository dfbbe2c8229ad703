//! rexcsv CLI entrypoint

use clap::Parser;

use rexcsv::cli::Cli;
use rexcsv::output;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        // Display error in red with clean formatting
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
