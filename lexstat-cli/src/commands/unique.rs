//! Unique words command

use super::Context;
use crate::input::SourceArgs;
use anyhow::Result;
use clap::Args;
use lexstat_core::unique_words;

/// Arguments for the unique command
#[derive(Debug, Args)]
pub struct UniqueArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl UniqueArgs {
    /// Execute the unique command
    pub fn execute(&self, ctx: &mut Context) -> Result<()> {
        let source = self.source.to_source()?;
        let vocabulary = unique_words(&source)?;

        let mut words: Vec<&str> = vocabulary.iter().map(String::as_str).collect();
        words.sort_unstable();
        ctx.formatter.words(&words)
    }
}
