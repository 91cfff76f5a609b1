//! `urlparts config` – show config location and values.

use anyhow::Result;
use urlparts_core::config::{self, UrlPartsConfig};
use urlparts_core::logging;

pub fn run_config(cfg: &UrlPartsConfig) -> Result<()> {
    println!("# config: {}", config::config_path()?.display());
    if let Ok(log) = logging::log_path() {
        println!("# log:    {}", log.display());
    }
    print!("{}", cfg.to_toml()?);
    Ok(())
}
