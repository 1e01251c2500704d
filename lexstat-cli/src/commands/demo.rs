//! Demonstration over a built-in sample text

use super::Context;
use anyhow::Result;
use lexstat_core::{
    most_common, text_lines, unique_words, word_cooccurrence_matrix, word_frequency, Source,
};

/// Sample text analysed by the demo command
pub const SAMPLE_TEXT: &str = "Hello world! This is a test.
                            Hello again, world!
                            Testing word frequencies.";

/// Run every analysis on [`SAMPLE_TEXT`]
pub fn execute(ctx: &mut Context) -> Result<()> {
    let source = Source::from_text(SAMPLE_TEXT);
    let window = ctx.config.cooccurrence.window;

    let counts = word_frequency(&source)?;
    ctx.formatter.section("frequency")?;
    ctx.formatter.frequencies(&most_common(&counts, None))?;

    let vocabulary = unique_words(&source)?;
    let mut words: Vec<&str> = vocabulary.iter().map(String::as_str).collect();
    words.sort_unstable();
    ctx.formatter.section("unique")?;
    ctx.formatter.words(&words)?;

    let pairs = word_cooccurrence_matrix(&source, window)?;
    ctx.formatter.section("cooccurrence")?;
    ctx.formatter.pairs(&pairs)?;

    ctx.formatter.section("lines")?;
    for line in text_lines(source) {
        ctx.formatter.line(&line?)?;
    }
    Ok(())
}
