//! CLI command implementations

use crate::config::CliConfig;
use crate::output::{OutputFormat, OutputFormatter};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cooccur;
pub mod demo;
pub mod freq;
pub mod lines;
pub mod unique;

/// Word statistics for text and text files
#[derive(Debug, Parser)]
#[command(name = "lexstat", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (default: from config, otherwise text)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true, env = "LEXSTAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count how often each word appears
    Freq(freq::FreqArgs),

    /// List the distinct words
    Unique(unique::UniqueArgs),

    /// List word pairs that appear within a window of each other
    Cooccur(cooccur::CooccurArgs),

    /// Print the stripped lines of the input
    Lines(lines::LinesArgs),

    /// Run every analysis on a built-in sample text
    Demo,
}

/// Settings shared by every command
pub struct Context {
    /// Loaded (or default) configuration
    pub config: CliConfig,
    /// Destination for results
    pub formatter: Box<dyn OutputFormatter>,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting lexstat");
        log::debug!("Arguments: {:?}", self);

        let mut ctx = self.context()?;
        match &self.command {
            Commands::Freq(args) => args.execute(&mut ctx)?,
            Commands::Unique(args) => args.execute(&mut ctx)?,
            Commands::Cooccur(args) => args.execute(&mut ctx)?,
            Commands::Lines(args) => args.execute(&mut ctx)?,
            Commands::Demo => demo::execute(&mut ctx)?,
        }
        ctx.formatter.finish()
    }

    fn context(&self) -> Result<Context> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)?,
        };
        let formatter = format.stdout_formatter(config.output.pretty_json);
        Ok(Context { config, formatter })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running inside tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_freq_with_global_flags() {
        let cli = Cli::try_parse_from([
            "lexstat", "freq", "--text", "a b", "--min-length", "3", "--format", "json", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Freq(args) => {
                assert_eq!(args.source.text.as_deref(), Some("a b"));
                assert_eq!(args.min_length, Some(3));
            }
            other => panic!("Expected Freq, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_cooccur_window() {
        let cli = Cli::try_parse_from(["lexstat", "cooccur", "-w", "4", "corpus.txt"]).unwrap();
        match cli.command {
            Commands::Cooccur(args) => {
                assert_eq!(args.window, Some(4));
                assert_eq!(args.source.source.as_deref(), Some("corpus.txt"));
            }
            other => panic!("Expected Cooccur, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_window_is_rejected() {
        assert!(Cli::try_parse_from(["lexstat", "cooccur", "-w", "-1", "--text", "a"]).is_err());
    }

    #[test]
    fn test_text_and_file_conflict() {
        assert!(
            Cli::try_parse_from(["lexstat", "lines", "--text", "a", "--file", "b.txt"]).is_err()
        );
    }

    #[test]
    fn test_demo_takes_no_source() {
        let cli = Cli::try_parse_from(["lexstat", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo));
    }
}
