//! `urlparts parse <url>` – decompose one URL.

use anyhow::Result;
use urlparts_core::config::UrlPartsConfig;
use urlparts_core::{sink, transform, InputRecord, OutputRecord};

/// Runs a single URL through the same transform as a batch run.
pub fn parse_one(cfg: &UrlPartsConfig, url: &str) -> Option<OutputRecord> {
    let input = [InputRecord::new(0, false, url)];
    let opts = transform::TransformOptions {
        workers: Some(1),
        ..cfg.transform_options()
    };
    transform::parse_urls(&input, &opts).into_iter().next()
}

pub fn run_parse(cfg: &UrlPartsConfig, url: &str, pretty: bool) -> Result<()> {
    let Some(record) = parse_one(cfg, url) else {
        anyhow::bail!("no record produced for {url}");
    };
    let value = sink::record_to_value(&record, &cfg.output)?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{text}");
    Ok(())
}
