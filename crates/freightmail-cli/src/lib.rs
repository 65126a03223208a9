//! Freightmail CLI library.
//!
//! This library provides the core functionality for the Freightmail command-line interface,
//! including configuration management, batch processing, and output formatting.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use batch::{process_directory, BatchReport, FileOutcome};
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use pipeline::Pipeline;
