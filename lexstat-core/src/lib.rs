//! Lexical statistics over inline text or text files
//!
//! Four independent operations share one input abstraction, [`Source`]:
//!
//! - [`word_frequency`] / [`word_frequency_with`]: token counts, optionally
//!   filtered by a predicate over the token
//! - [`unique_words`]: the distinct vocabulary
//! - [`word_cooccurrence_matrix`]: distinct ordered pairs of tokens that
//!   appear within a forward window of each other
//! - [`text_lines`]: a lazy sequence of stripped lines
//!
//! ```no_run
//! use lexstat_core::{word_frequency, Source};
//!
//! let counts = word_frequency(&Source::from_text("to be or not to be")).unwrap();
//! assert_eq!(counts["be"], 2);
//! ```

#![warn(missing_docs)]

pub mod cooccurrence;
pub mod error;
pub mod frequency;
pub mod input;
pub mod lines;
pub mod tokenizer;
pub mod vocabulary;

// Re-export key types
pub use cooccurrence::{
    cooccurrence_analysis, word_cooccurrence_matrix, CooccurrenceMatrix, DEFAULT_WINDOW,
};
pub use error::{LexError, Result};
pub use frequency::{most_common, word_frequency, word_frequency_with, FrequencyMap};
pub use input::Source;
pub use lines::{text_lines, TextLines};
pub use tokenizer::{count_tokens, tokenize};
pub use vocabulary::unique_words;
