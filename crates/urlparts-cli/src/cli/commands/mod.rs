//! CLI command handlers, one per file.

mod config;
mod parse;
mod run;

pub use config::run_config;
pub use parse::run_parse;
pub use run::run_batch;
