//! lexstat command-line entry point

use clap::Parser;
use lexstat_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().execute()
}
