//! Output formatting module

use crate::error::CliError;
use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Start a named section (used when one run prints several results)
    fn section(&mut self, title: &str) -> Result<()>;

    /// Word counts, already in display order
    fn frequencies(&mut self, entries: &[(&str, usize)]) -> Result<()>;

    /// A list of distinct words
    fn words(&mut self, words: &[&str]) -> Result<()>;

    /// Co-occurring word pairs
    fn pairs(&mut self, pairs: &[(String, String)]) -> Result<()>;

    /// A single line, written out as soon as it is produced unless a section
    /// collects it
    fn line(&mut self, line: &str) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one entry per line
    Text,
    /// A single JSON document
    Json,
}

impl OutputFormat {
    /// Parse a format name as used in configuration files
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        match name.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::UnknownFormat(name.to_string())),
        }
    }

    /// Build a formatter writing to stdout
    pub fn stdout_formatter(self, pretty_json: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout(), pretty_json)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name("JSON").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::from_name("markdown"),
            Err(CliError::UnknownFormat(_))
        ));
    }
}
