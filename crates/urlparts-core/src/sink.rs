//! Record sink: writes the batch as a single JSON-lines artifact.
//!
//! Lines go to a `.part` temp file next to the destination, which is fsynced
//! and then renamed over the output path. A failed run leaves no partial
//! output and no temp file behind.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::BatchError;
use crate::record::OutputRecord;

/// Output knobs (the `[output]` section in config.toml).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Emit absent fields as `null` instead of leaving them out of the line.
    pub write_null_fields: bool,
}

/// Renders one record as a JSON value, dropping absent fields unless
/// `write_null_fields` is set.
pub fn record_to_value(
    record: &OutputRecord,
    opts: &OutputOptions,
) -> Result<serde_json::Value, BatchError> {
    let mut value = serde_json::to_value(record).map_err(|source| BatchError::Serialize {
        row_id: record.row_id,
        source,
    })?;
    if !opts.write_null_fields {
        if let serde_json::Value::Object(map) = &mut value {
            map.retain(|_, v| !v.is_null());
        }
    }
    Ok(value)
}

/// Writes `records` to `path`, one JSON object per line, replacing any
/// existing file. Parent directories are created.
pub fn write_output(
    path: &Path,
    records: &[OutputRecord],
    opts: &OutputOptions,
) -> Result<(), BatchError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| BatchError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let tmp = tempfile::Builder::new()
        .prefix(".urlparts-")
        .suffix(".part")
        .tempfile_in(dir)
        .map_err(|source| BatchError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    let write_err = |source| BatchError::Write {
        path: tmp.path().to_path_buf(),
        source,
    };

    {
        let mut out = BufWriter::new(tmp.as_file());
        for record in records {
            let value = record_to_value(record, opts)?;
            serde_json::to_writer(&mut out, &value).map_err(|source| BatchError::Serialize {
                row_id: record.row_id,
                source,
            })?;
            out.write_all(b"\n").map_err(write_err)?;
        }
        out.flush().map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;

    // On failure the temp file comes back inside the error and is deleted when dropped.
    tmp.persist(path).map_err(|e| BatchError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    tracing::debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
