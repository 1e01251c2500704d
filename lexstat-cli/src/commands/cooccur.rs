//! Co-occurrence command

use super::Context;
use crate::input::SourceArgs;
use anyhow::Result;
use clap::Args;
use lexstat_core::word_cooccurrence_matrix;

/// Arguments for the cooccur command
#[derive(Debug, Args)]
pub struct CooccurArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Forward window in words (default: from config, otherwise 2)
    #[arg(short, long, value_name = "N")]
    pub window: Option<usize>,
}

impl CooccurArgs {
    /// Execute the cooccur command
    pub fn execute(&self, ctx: &mut Context) -> Result<()> {
        let source = self.source.to_source()?;
        let window = self.window.unwrap_or(ctx.config.cooccurrence.window);
        if window == 0 {
            log::warn!("Window is 0, no pairs can co-occur");
        }

        let pairs = word_cooccurrence_matrix(&source, window)?;
        log::info!("Found {} co-occurring pairs (window {window})", pairs.len());
        ctx.formatter.pairs(&pairs)
    }
}
