//! CLI for the urlparts batch URL decomposer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlparts_core::config;
use urlparts_core::source::MalformedLines;

use commands::{run_batch, run_config, run_parse};

/// Top-level CLI for urlparts.
#[derive(Debug, Parser)]
#[command(name = "urlparts")]
#[command(about = "urlparts: split raw URLs into scheme, host, path, fragment and query parameters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a JSON-lines batch of URL records into a single output file.
    Run {
        /// Input JSON-lines file (default: input_path from config).
        #[arg(long, short = 'i', value_name = "PATH")]
        input: Option<PathBuf>,
        /// Output file (default: output_path from config). Replaced if it exists.
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
        /// Worker threads (1 = sequential). Default: workers from config, else one per CPU.
        #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        jobs: Option<usize>,
        /// Drop unparseable input lines instead of failing the batch.
        #[arg(long)]
        skip_malformed: bool,
    },

    /// Decompose a single URL and print the output record as JSON.
    Parse {
        /// Raw (percent-encoded) URL.
        url: String,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },

    /// Show the config file location and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                input,
                output,
                jobs,
                skip_malformed,
            } => {
                if let Some(input) = input {
                    cfg.input_path = input;
                }
                if let Some(output) = output {
                    cfg.output_path = output;
                }
                if jobs.is_some() {
                    cfg.workers = jobs;
                }
                if skip_malformed {
                    cfg.malformed_lines = MalformedLines::Skip;
                }
                run_batch(&cfg)?;
            }
            CliCommand::Parse { url, pretty } => run_parse(&cfg, &url, pretty)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
