use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::decompose::DecodeOptions;
use crate::sink::OutputOptions;
use crate::source::MalformedLines;
use crate::transform::TransformOptions;

/// Global configuration loaded from `~/.config/urlparts/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlPartsConfig {
    /// JSON-lines file with `row_id`, `is_sample`, `raw_url` per line.
    pub input_path: PathBuf,
    /// Destination of the single JSON-lines output artifact.
    pub output_path: PathBuf,
    /// Worker threads for decomposition (None = one per CPU, 0 or 1 = sequential).
    #[serde(default)]
    pub workers: Option<usize>,
    /// "fail" (default) aborts on an unparseable input line; "skip" drops it with a warning.
    #[serde(default)]
    pub malformed_lines: MalformedLines,
    #[serde(default)]
    pub decode: DecodeOptions,
    #[serde(default)]
    pub output: OutputOptions,
}

impl Default for UrlPartsConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/urls.json"),
            output_path: PathBuf::from("data/urls-output.json"),
            workers: None,
            malformed_lines: MalformedLines::Fail,
            decode: DecodeOptions::default(),
            output: OutputOptions::default(),
        }
    }
}

impl UrlPartsConfig {
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            decode: self.decode,
            workers: self.workers,
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize config")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlparts")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlPartsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlPartsConfig::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, default_cfg.to_toml()?)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<UrlPartsConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))
}
