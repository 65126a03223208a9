//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::pipeline::Pipeline;
use freightmail_domain::ShipmentRecord;
use tracing::info;

/// Execute the inspect command.
pub async fn execute_inspect(
    args: InspectArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<ShipmentRecord> {
    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CliError::InvalidInput(format!("'{}' is not a file path", args.file.display()))
        })?;

    let content = tokio::fs::read_to_string(&args.file).await?;
    info!("Inspecting {}", args.file.display());

    let record = Pipeline::from_config(config)?.process_text(&content, &file_name);
    println!("{}", formatter.format_record(&record)?);

    Ok(record)
}
