//! apidiff CLI
//!
//! Command-line interface for comparing two public API snapshots

use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "apidiff-cli")]
#[command(about = "apidiff - Markdown report of public API changes between two snapshots", long_about = None)]
struct Cli {
    #[command(flatten)]
    diff: commands::diff::DiffArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::diff::execute(cli.diff) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
