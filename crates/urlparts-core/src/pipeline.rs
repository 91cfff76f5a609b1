//! One batch run: read input, decompose every URL, write the output artifact.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use crate::config::UrlPartsConfig;
use crate::sink;
use crate::source;
use crate::transform;

/// Counts from a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub read: usize,
    pub skipped: usize,
    pub written: usize,
    /// Output records with an empty parameter list.
    pub without_params: usize,
    pub elapsed: Duration,
}

/// Runs the batch described by `cfg` and returns a summary.
pub fn run_batch(cfg: &UrlPartsConfig) -> Result<BatchSummary> {
    let started = Instant::now();

    let batch = source::read_input(&cfg.input_path, cfg.malformed_lines)
        .context("read input batch")?;
    tracing::info!(
        "read {} records from {} ({} skipped)",
        batch.records.len(),
        cfg.input_path.display(),
        batch.skipped
    );

    let output = transform::parse_urls(&batch.records, &cfg.transform_options());
    anyhow::ensure!(
        output.len() == batch.records.len(),
        "decomposed {} records from {} inputs",
        output.len(),
        batch.records.len()
    );

    sink::write_output(&cfg.output_path, &output, &cfg.output).context("write output batch")?;

    let summary = BatchSummary {
        read: batch.records.len(),
        skipped: batch.skipped,
        written: output.len(),
        without_params: output.iter().filter(|r| r.query_params.is_empty()).count(),
        elapsed: started.elapsed(),
    };
    tracing::info!(
        "wrote {} records to {} in {:.3}s",
        summary.written,
        cfg.output_path.display(),
        summary.elapsed.as_secs_f64()
    );
    Ok(summary)
}
