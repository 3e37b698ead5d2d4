//! Strip a vendor substring from icon file names in place.
//!
//! Run with: fix-icon-names <DIRECTORY> <SUBSTRING> [--dry-run]

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use iconsheet::cli::{exit_with, init_logging};
use iconsheet::rename::IconRenamer;
use iconsheet::{Error, Result, require_argument};

#[derive(Parser, Debug)]
#[command(name = "fix-icon-names", version, about, long_about = None)]
struct Cli {
    /// Directory searched recursively for SVG icons
    directory: String,

    /// Substring to remove from each file name
    substring: String,

    /// Print planned renames without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<()> {
    let directory = require_argument("directory", &cli.directory)?;
    // Whitespace-only substrings are valid.
    if cli.substring.is_empty() {
        return Err(Error::empty_argument("substringToStrip"));
    }

    let verb = if cli.dry_run { "Would rename" } else { "Renamed" };
    IconRenamer::new(cli.substring.as_str())
        .dry_run(cli.dry_run)
        .run_with(directory, |rename| {
            println!("{verb} {} -> {}", rename.from.display(), rename.to.display());
        })?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    exit_with(run(&cli))
}
