//! Line iteration command

use super::Context;
use crate::input::SourceArgs;
use anyhow::Result;
use clap::Args;
use lexstat_core::text_lines;

/// Arguments for the lines command
#[derive(Debug, Args)]
pub struct LinesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl LinesArgs {
    /// Execute the lines command
    pub fn execute(&self, ctx: &mut Context) -> Result<()> {
        let source = self.source.to_source()?;
        let mut count = 0usize;
        for line in text_lines(source) {
            ctx.formatter.line(&line?)?;
            count += 1;
        }
        log::info!("Printed {count} lines");
        Ok(())
    }
}
