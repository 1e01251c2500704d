//! Input abstraction for text analysis
//!
//! Callers say explicitly whether a value is literal content or a path to
//! stored content. The newline heuristic is still available through
//! [`Source::infer`] for callers that only have a bare string.

use crate::error::{LexError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Text to analyse, either inline or stored in a file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// Inline text content
    Text(String),
    /// Path to a UTF-8 text file
    File(PathBuf),
}

impl Source {
    /// Create a source from inline text
    pub fn from_text(text: impl Into<String>) -> Self {
        Source::Text(text.into())
    }

    /// Create a source from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Source::File(path.into())
    }

    /// Classify a bare string: anything containing a newline is inline text,
    /// everything else is treated as a file path.
    ///
    /// A one-line piece of text is misclassified as a path; prefer
    /// [`Source::from_text`] or [`Source::from_file`] when the caller knows.
    pub fn infer(value: &str) -> Self {
        if value.contains('\n') {
            Source::Text(value.to_string())
        } else {
            Source::File(PathBuf::from(value))
        }
    }

    /// Whether this source refers to a file
    pub fn is_file(&self) -> bool {
        matches!(self, Source::File(_))
    }

    /// Resolve the source to its full text content
    ///
    /// Inline text is returned as-is. Files are read completely and decoded
    /// as UTF-8.
    pub fn read_text(&self) -> Result<String> {
        match self {
            Source::Text(text) => Ok(text.clone()),
            Source::File(path) => read_file(path),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| LexError::from_io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| LexError::from_utf8(path, e))?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::File(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::File(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inline_text_is_returned_unchanged() {
        let source = Source::from_text("Hello world.");
        assert_eq!(source.read_text().unwrap(), "Hello world.");
        assert!(!source.is_file());
    }

    #[test]
    fn test_file_is_read_fully() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sample.txt");
        fs::write(&file_path, "first line\nsecond line\n").unwrap();

        let source = Source::from_file(&file_path);
        assert!(source.is_file());
        assert_eq!(source.read_text().unwrap(), "first line\nsecond line\n");
    }

    #[test]
    fn test_missing_file() {
        let source = Source::from_file("/nonexistent/lexstat/input.txt");
        let err = source.read_text().unwrap_err();
        assert!(matches!(err, LexError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [b'c', b'a', b'f', 0xe9]).unwrap();

        let err = Source::from_file(&file_path).read_text().unwrap_err();
        assert!(matches!(err, LexError::Decoding { .. }));
    }

    #[test]
    fn test_infer_uses_newline() {
        assert_eq!(
            Source::infer("a\nb"),
            Source::Text("a\nb".to_string())
        );
        assert_eq!(
            Source::infer("notes.txt"),
            Source::File(PathBuf::from("notes.txt"))
        );
        // Single-line text is taken as a path
        assert!(Source::infer("Hello world").is_file());
    }

    #[test]
    fn test_conversions() {
        let text: Source = String::from("x\ny").into();
        assert!(matches!(text, Source::Text(_)));

        let path: Source = PathBuf::from("a.txt").into();
        assert!(path.is_file());

        let borrowed: Source = Path::new("b.txt").into();
        assert_eq!(borrowed, Source::File(PathBuf::from("b.txt")));
    }
}
