//! lexstat CLI library
//!
//! This library provides the command-line interface for the lexstat
//! word statistics toolkit.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use commands::{Cli, Commands};
pub use error::{CliError, CliResult};
