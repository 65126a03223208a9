//! Process command implementation.

use crate::batch::{process_directory, BatchReport};
use crate::cli::ProcessArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::pipeline::Pipeline;
use std::sync::Arc;

/// Execute the process command.
///
/// Per-file failures are reported, not returned; only an unreadable input
/// directory or an uncreatable output directory is an error.
pub async fn execute_process(
    args: ProcessArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<BatchReport> {
    let input = args.input.unwrap_or_else(|| config.settings.input_dir.clone());
    let output = args
        .output
        .unwrap_or_else(|| config.settings.output_dir.clone());
    let jobs = args.jobs.unwrap_or(config.settings.jobs);

    if jobs == 0 {
        return Err(CliError::InvalidInput(
            "--jobs must be at least 1".to_string(),
        ));
    }

    let pipeline = Arc::new(Pipeline::from_config(config)?);
    let report = process_directory(pipeline, &input, &output, jobs).await?;

    println!("{}", formatter.format_batch(&report)?);

    Ok(report)
}
