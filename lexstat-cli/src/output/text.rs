//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - one entry per line
pub struct TextFormatter<W: Write> {
    writer: W,
    sections: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sections: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn section(&mut self, title: &str) -> Result<()> {
        if self.sections > 0 {
            writeln!(self.writer)?;
        }
        self.sections += 1;
        writeln!(self.writer, "== {title} ==")?;
        Ok(())
    }

    fn frequencies(&mut self, entries: &[(&str, usize)]) -> Result<()> {
        let width = entries.iter().map(|(word, _)| word.chars().count()).max().unwrap_or(0);
        for (word, count) in entries {
            writeln!(self.writer, "{word:<width$}  {count}")?;
        }
        Ok(())
    }

    fn words(&mut self, words: &[&str]) -> Result<()> {
        for word in words {
            writeln!(self.writer, "{word}")?;
        }
        Ok(())
    }

    fn pairs(&mut self, pairs: &[(String, String)]) -> Result<()> {
        for (a, b) in pairs {
            writeln!(self.writer, "{a}\t{b}")?;
        }
        Ok(())
    }

    fn line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
