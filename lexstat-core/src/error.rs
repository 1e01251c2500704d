//! Error types for text analysis
//!
//! Every operation in this crate fails only while resolving its input, so the
//! variants below describe the ways reading a text source can go wrong.

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while resolving a text source
#[derive(Error, Debug)]
pub enum LexError {
    /// The referenced file does not exist
    #[error("file not found: {}", .path.display())]
    NotFound {
        /// The path that could not be found
        path: PathBuf,
    },

    /// The file exists but could not be opened or read
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// The path being read
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The file content is not valid UTF-8
    #[error("invalid UTF-8 in {}: {source}", .path.display())]
    Decoding {
        /// The path being decoded
        path: PathBuf,
        /// The underlying conversion failure
        #[source]
        source: FromUtf8Error,
    },
}

impl LexError {
    /// Classify an I/O failure on `path`
    ///
    /// A missing file gets its own variant; everything else stays a plain
    /// I/O error.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LexError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LexError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Wrap a UTF-8 conversion failure on `path`
    pub fn from_utf8(path: &Path, source: FromUtf8Error) -> Self {
        LexError::Decoding {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path involved in the failure
    pub fn path(&self) -> &Path {
        match self {
            LexError::NotFound { path }
            | LexError::Io { path, .. }
            | LexError::Decoding { path, .. } => path.as_path(),
        }
    }
}

/// Result type for text analysis operations
pub type Result<T> = std::result::Result<T, LexError>;
