//! Directory batch processing.
//!
//! Each file is read, processed and written on its own task. A failure on one
//! file is recorded in its outcome and never stops the rest of the batch.

use crate::error::Result;
use crate::pipeline::Pipeline;
use anyhow::{anyhow, Context};
use freightmail_domain::ShipmentRecord;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

const INPUT_EXTENSION: &str = ".txt";

/// Result of processing one input file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Input file name (no directory)
    pub file_name: String,

    /// The written record and its JSON path, or why the file was skipped
    pub result: std::result::Result<(ShipmentRecord, PathBuf), String>,
}

/// Per-file outcomes of a batch, ordered by file name.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per discovered input file
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Files whose JSON record was written.
    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Files that could not be read or written.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.processed()
    }
}

/// List `*.txt` files directly inside `dir`, sorted by file name.
pub async fn discover_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_text = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(INPUT_EXTENSION));
        if is_text && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// JSON output path for an input file: `<output_dir>/<stem>.json`.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.json", stem))
}

/// Process every text file in `input_dir`, writing records to `output_dir`.
///
/// Fails only when the input directory cannot be listed or the output
/// directory cannot be created.
pub async fn process_directory(
    pipeline: Arc<Pipeline>,
    input_dir: &Path,
    output_dir: &Path,
    jobs: usize,
) -> Result<BatchReport> {
    let files = discover_text_files(input_dir).await?;
    fs::create_dir_all(output_dir).await?;

    info!(
        "Processing {} file(s) from {} with {} job(s)",
        files.len(),
        input_dir.display(),
        jobs
    );

    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    let mut tasks = JoinSet::new();

    for (index, path) in files.iter().cloned().enumerate() {
        let pipeline = Arc::clone(&pipeline);
        let semaphore = Arc::clone(&semaphore);
        let output_dir = output_dir.to_path_buf();

        tasks.spawn(async move {
            let result = match semaphore.acquire_owned().await {
                Ok(_permit) => process_file(&pipeline, &path, &output_dir).await,
                Err(e) => Err(anyhow!(e)),
            };
            (index, result)
        });
    }

    let mut slots: Vec<Option<anyhow::Result<(ShipmentRecord, PathBuf)>>> =
        (0..files.len()).map(|_| None).collect();

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(e) => warn!("Processing task did not complete: {}", e),
        }
    }

    let outcomes = files
        .iter()
        .zip(slots)
        .map(|(path, slot)| {
            let file_name = file_name(path);
            let result = match slot {
                Some(Ok(written)) => Ok(written),
                Some(Err(e)) => {
                    warn!("Skipping {}: {:#}", file_name, e);
                    Err(format!("{:#}", e))
                }
                None => Err("processing task aborted".to_string()),
            };
            FileOutcome { file_name, result }
        })
        .collect();

    let report = BatchReport { outcomes };
    info!(
        "Batch complete: {} processed, {} failed",
        report.processed(),
        report.failed()
    );
    Ok(report)
}

async fn process_file(
    pipeline: &Pipeline,
    path: &Path,
    output_dir: &Path,
) -> anyhow::Result<(ShipmentRecord, PathBuf)> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Error reading file {}", path.display()))?;

    let record = pipeline.process_text(&content, &file_name(path));

    let target = output_path(path, output_dir);
    let json = serde_json::to_string_pretty(&record)
        .with_context(|| format!("Error serializing record for {}", path.display()))?;
    fs::write(&target, json)
        .await
        .with_context(|| format!("Error writing file {}", target.display()))?;

    debug!("Wrote {}", target.display());
    Ok((record, target))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
