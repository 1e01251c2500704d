//! Lazy line iteration over inline text or a file
//!
//! File-backed sequences open the file on the first call to `next` and read
//! one line per step, so memory stays bounded by the longest line. The
//! handle is closed as soon as the end of the file or an error is reached,
//! or when the iterator is dropped.
//!
//! Files break lines on `\n`, `\r\n` and a lone `\r`. Inline text also
//! breaks on the vertical tab, form feed, the information separators
//! `\x1c`..`\x1e`, NEL (`\u{85}`) and the Unicode line and paragraph
//! separators. A trailing terminator does not start an extra empty line.

use crate::error::{LexError, Result};
use crate::input::Source;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::PathBuf;

/// Produce the stripped lines of a source, one at a time
///
/// Every call returns a fresh, independent sequence. Errors opening or
/// reading a file surface from `next`, after which the sequence ends.
pub fn text_lines(source: Source) -> TextLines {
    let state = match source {
        Source::Text(text) => LineState::Inline(split_lines(&text).into_iter()),
        Source::File(path) => LineState::Pending(path),
    };
    TextLines { state }
}

/// Iterator over stripped lines, see [`text_lines`]
#[derive(Debug)]
pub struct TextLines {
    state: LineState,
}

#[derive(Debug)]
enum LineState {
    Inline(std::vec::IntoIter<String>),
    Pending(PathBuf),
    Reading {
        path: PathBuf,
        reader: BufReader<File>,
        buffer: Vec<u8>,
    },
    Done,
}

impl TextLines {
    /// Whether a file handle is currently held open
    pub fn is_open(&self) -> bool {
        matches!(self.state, LineState::Reading { .. })
    }

    fn next_from_file(&mut self) -> Option<Result<String>> {
        if let LineState::Pending(path) = &self.state {
            let path = path.clone();
            match File::open(&path) {
                Ok(file) => {
                    log::debug!("opened {} for line iteration", path.display());
                    self.state = LineState::Reading {
                        path,
                        reader: BufReader::new(file),
                        buffer: Vec::new(),
                    };
                }
                Err(e) => {
                    self.state = LineState::Done;
                    return Some(Err(LexError::from_io(&path, e)));
                }
            }
        }

        let LineState::Reading {
            path,
            reader,
            buffer,
        } = &mut self.state
        else {
            return None;
        };

        buffer.clear();
        let item = match read_line_bytes(reader, buffer) {
            Ok(false) => {
                log::trace!("reached end of {}", path.display());
                None
            }
            Ok(true) => match String::from_utf8(std::mem::take(buffer)) {
                Ok(line) => return Some(Ok(strip_line(&line).to_string())),
                Err(e) => Some(Err(LexError::from_utf8(path, e))),
            },
            Err(e) => Some(Err(LexError::from_io(path, e))),
        };
        self.state = LineState::Done;
        item
    }
}

impl Iterator for TextLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            LineState::Inline(lines) => match lines.next() {
                Some(line) => Some(Ok(strip_line(&line).to_string())),
                None => {
                    self.state = LineState::Done;
                    None
                }
            },
            LineState::Pending(_) | LineState::Reading { .. } => self.next_from_file(),
            LineState::Done => None,
        }
    }
}

impl FusedIterator for TextLines {}

/// Read one line into `line`, dropping its terminator
///
/// Returns `false` once the reader is exhausted and nothing was read.
fn read_line_bytes<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<bool> {
    let mut read_any = false;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = available[i];
                line.extend_from_slice(&available[..i]);
                reader.consume(i + 1);
                if terminator == b'\r' {
                    // \r\n may straddle two buffer fills
                    if reader.fill_buf()?.first() == Some(&b'\n') {
                        reader.consume(1);
                    }
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}

fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split inline text into lines without their terminators
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }
        lines.push(text[start..i].to_string());
        start = i + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

/// Strip surrounding whitespace, counting the information separators as
/// whitespace too
fn strip_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}
