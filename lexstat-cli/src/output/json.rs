//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;

/// JSON formatter
///
/// Results land in one document under the keys `frequencies`, `words` and
/// `pairs`, written by `finish`. When sections are used, each section
/// becomes its own object keyed by title.
///
/// Lines outside a section are not buffered: each one is written at once as
/// a JSON string on its own output line (JSON Lines), so large inputs stream
/// in bounded memory. Lines inside a section are collected under `lines`.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    document: Map<String, Value>,
    section: Option<(String, Map<String, Value>)>,
    streamed_lines: bool,
}

/// Data structure for one frequency entry
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WordCount {
    /// The word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            document: Map::new(),
            section: None,
            streamed_lines: false,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn target(&mut self) -> &mut Map<String, Value> {
        match &mut self.section {
            Some((_, map)) => map,
            None => &mut self.document,
        }
    }

    fn insert(&mut self, key: &str, value: Value) {
        self.target().insert(key.to_string(), value);
    }

    fn close_section(&mut self) {
        if let Some((title, map)) = self.section.take() {
            self.document.insert(title, Value::Object(map));
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn section(&mut self, title: &str) -> Result<()> {
        self.close_section();
        self.section = Some((title.to_string(), Map::new()));
        Ok(())
    }

    fn frequencies(&mut self, entries: &[(&str, usize)]) -> Result<()> {
        let counts: Vec<WordCount> = entries
            .iter()
            .map(|&(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect();
        self.insert("frequencies", serde_json::to_value(counts)?);
        Ok(())
    }

    fn words(&mut self, words: &[&str]) -> Result<()> {
        self.insert("words", serde_json::to_value(words)?);
        Ok(())
    }

    fn pairs(&mut self, pairs: &[(String, String)]) -> Result<()> {
        self.insert("pairs", serde_json::to_value(pairs)?);
        Ok(())
    }

    fn line(&mut self, line: &str) -> Result<()> {
        match &mut self.section {
            Some((_, map)) => {
                let lines = map
                    .entry("lines")
                    .or_insert_with(|| Value::Array(Vec::new()));
                if let Value::Array(items) = lines {
                    items.push(Value::String(line.to_string()));
                }
            }
            None => {
                serde_json::to_writer(&mut self.writer, line)?;
                writeln!(self.writer)?;
                self.streamed_lines = true;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.close_section();
        if !(self.streamed_lines && self.document.is_empty()) {
            let document = Value::Object(std::mem::take(&mut self.document));
            if self.pretty {
                serde_json::to_writer_pretty(&mut self.writer, &document)?;
            } else {
                serde_json::to_writer(&mut self.writer, &document)?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
