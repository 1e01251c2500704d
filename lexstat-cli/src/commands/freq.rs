//! Word frequency command

use super::Context;
use crate::input::SourceArgs;
use anyhow::Result;
use clap::Args;
use lexstat_core::{most_common, word_frequency, word_frequency_with};

/// Arguments for the freq command
#[derive(Debug, Args)]
pub struct FreqArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Keep only words longer than N characters
    #[arg(short, long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Show only the N most common words
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,
}

impl FreqArgs {
    /// Execute the freq command
    pub fn execute(&self, ctx: &mut Context) -> Result<()> {
        let source = self.source.to_source()?;
        let min_length = self.min_length.unwrap_or(ctx.config.frequency.min_length);
        let top = self.top.unwrap_or(ctx.config.frequency.top);

        let counts = if min_length > 0 {
            word_frequency_with(&source, |word| word.chars().count() > min_length)?
        } else {
            word_frequency(&source)?
        };
        log::info!("Found {} distinct words", counts.len());

        let limit = (top > 0).then_some(top);
        ctx.formatter.frequencies(&most_common(&counts, limit))
    }
}
