//! Errors raised while reading or writing a batch.
//!
//! The transform itself has no failure modes; everything here comes from the
//! record source and sink.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-blank input line that is not a valid record. `line` is 1-based.
    #[error("{}:{line}: malformed record", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialize record row_id={row_id}")]
    Serialize {
        row_id: i64,
        #[source]
        source: serde_json::Error,
    },

    #[error("write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Moving the finished temp file onto the output path failed.
    #[error("persist {}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
