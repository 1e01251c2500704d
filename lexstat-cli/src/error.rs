//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No input source was given
    MissingSource,
    /// Configuration file could not be parsed or holds an invalid value
    ConfigError(String),
    /// Unknown output format name
    UnknownFormat(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingSource => {
                write!(f, "No input given: pass SOURCE, --text or --file")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownFormat(name) => write!(f, "Unknown output format: {name}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_display() {
        assert_eq!(
            CliError::MissingSource.to_string(),
            "No input given: pass SOURCE, --text or --file"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("window must be an integer".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: window must be an integer"
        );
    }

    #[test]
    fn test_unknown_format_display() {
        let error = CliError::UnknownFormat("yaml".to_string());
        assert_eq!(error.to_string(), "Unknown output format: yaml");
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::MissingSource.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
