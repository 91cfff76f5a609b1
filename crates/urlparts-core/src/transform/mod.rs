//! Batch transform: input records to output records, one for one.
//!
//! Each record is decomposed and exploded into one row per query parameter
//! (in parallel when allowed), then the rows are grouped back so every input
//! record yields exactly one output record, parameterless ones included.

mod explode;
mod group;

pub use explode::{explode, ParamRow, RecordKey};
pub use group::regroup;

use rayon::prelude::*;

use crate::decompose::DecodeOptions;
use crate::record::{InputRecord, OutputRecord};

/// Options for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub decode: DecodeOptions,
    /// Worker threads for the explode stage. `None` uses the global rayon pool;
    /// `Some(0)` and `Some(1)` both run on the calling thread.
    pub workers: Option<usize>,
}

/// Decomposes every record of the batch. The result has the same length and
/// order as `records`.
pub fn parse_urls(records: &[InputRecord], opts: &TransformOptions) -> Vec<OutputRecord> {
    let rows = explode_all(records, opts);
    tracing::debug!(
        records = records.len(),
        rows = rows.len(),
        "exploded batch into parameter rows"
    );
    regroup(rows)
}

fn explode_all(records: &[InputRecord], opts: &TransformOptions) -> Vec<ParamRow> {
    let decode = opts.decode;
    match opts.workers {
        Some(0) | Some(1) => records
            .iter()
            .enumerate()
            .flat_map(|(i, r)| explode(i, r, &decode))
            .collect(),
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| explode_par(records, &decode)),
            Err(e) => {
                tracing::warn!("could not build {n}-thread pool ({e}); using the global pool");
                explode_par(records, &decode)
            }
        },
        None => explode_par(records, &decode),
    }
}

fn explode_par(records: &[InputRecord], decode: &DecodeOptions) -> Vec<ParamRow> {
    records
        .par_iter()
        .enumerate()
        .flat_map_iter(|(i, r)| explode(i, r, decode))
        .collect()
}
