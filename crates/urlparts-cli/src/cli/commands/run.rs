//! `urlparts run` – decompose a whole batch.

use anyhow::Result;
use urlparts_core::config::UrlPartsConfig;
use urlparts_core::pipeline;

pub fn run_batch(cfg: &UrlPartsConfig) -> Result<()> {
    let summary = pipeline::run_batch(cfg)?;
    println!(
        "Decomposed {} URLs ({} without query parameters) -> {}",
        summary.written,
        summary.without_params,
        cfg.output_path.display()
    );
    if summary.skipped > 0 {
        println!("  ({} malformed input lines skipped)", summary.skipped);
    }
    println!("  elapsed: {:.3}s", summary.elapsed.as_secs_f64());
    Ok(())
}
