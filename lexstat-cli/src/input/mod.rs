//! Input handling: turning command-line arguments into a text source

use crate::error::CliError;
use clap::Args;
use lexstat_core::Source;
use std::path::PathBuf;

/// Where the text to analyse comes from
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Text or file path; a value containing a newline is read as text
    #[arg(value_name = "SOURCE", conflicts_with_all = ["text", "file"])]
    pub source: Option<String>,

    /// Inline text to analyse
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// UTF-8 text file to analyse
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolve the arguments to a single source
    pub fn to_source(&self) -> Result<Source, CliError> {
        let source = match (&self.text, &self.file, &self.source) {
            (Some(text), _, _) => Source::from_text(text.clone()),
            (None, Some(path), _) => Source::from_file(path.clone()),
            (None, None, Some(value)) => Source::infer(value),
            (None, None, None) => return Err(CliError::MissingSource),
        };
        log::debug!("Resolved input source: {source:?}");
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_text() {
        let args = SourceArgs {
            text: Some("one line".to_string()),
            ..Default::default()
        };
        assert_eq!(args.to_source().unwrap(), Source::from_text("one line"));
    }

    #[test]
    fn test_explicit_file() {
        let args = SourceArgs {
            file: Some(PathBuf::from("notes.txt")),
            ..Default::default()
        };
        assert_eq!(args.to_source().unwrap(), Source::from_file("notes.txt"));
    }

    #[test]
    fn test_positional_is_inferred() {
        let multi_line = SourceArgs {
            source: Some("a\nb".to_string()),
            ..Default::default()
        };
        assert_eq!(multi_line.to_source().unwrap(), Source::from_text("a\nb"));

        let path = SourceArgs {
            source: Some("corpus.txt".to_string()),
            ..Default::default()
        };
        assert!(path.to_source().unwrap().is_file());
    }

    #[test]
    fn test_missing_source() {
        let err = SourceArgs::default().to_source().unwrap_err();
        assert!(matches!(err, CliError::MissingSource));
    }
}
