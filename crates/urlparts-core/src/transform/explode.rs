//! Fan-out: one row per query parameter.

use std::sync::Arc;

use crate::decompose::{decompose_with, DecodeOptions};
use crate::record::{InputRecord, QueryParam};

/// Identity of a decomposed record: the passthrough fields plus every scalar
/// the decomposer produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey {
    pub row_id: i64,
    pub is_sample: bool,
    pub raw_url: String,
    pub scheme: Option<String>,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub fragment: Option<String>,
}

/// One exploded row. `ordinal` is the position of the source record in the
/// input batch; rows of the same record share one `RecordKey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamRow {
    pub ordinal: usize,
    pub key: Arc<RecordKey>,
    /// `None` marks a record with no parameters; it still gets one row so the
    /// record survives grouping.
    pub param: Option<QueryParam>,
}

/// Decomposes `record` and fans it out into parameter rows, in query order.
/// Always returns at least one row.
pub fn explode(ordinal: usize, record: &InputRecord, opts: &DecodeOptions) -> Vec<ParamRow> {
    let decomposed = decompose_with(&record.raw_url, opts);
    let key = Arc::new(RecordKey {
        row_id: record.row_id,
        is_sample: record.is_sample,
        raw_url: record.raw_url.clone(),
        scheme: decomposed.scheme,
        domain: decomposed.domain,
        path: decomposed.path,
        fragment: decomposed.fragment,
    });

    if decomposed.query_params.is_empty() {
        return vec![ParamRow {
            ordinal,
            key,
            param: None,
        }];
    }

    decomposed
        .query_params
        .into_iter()
        .map(|param| ParamRow {
            ordinal,
            key: Arc::clone(&key),
            param: Some(param),
        })
        .collect()
}
