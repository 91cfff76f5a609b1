//! Record source: reads a JSON-lines batch into memory.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::BatchError;
use crate::record::InputRecord;

/// What to do with an input line that does not parse as a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLines {
    /// Abort the batch with `BatchError::Malformed`.
    #[default]
    Fail,
    /// Log a warning and drop the line.
    Skip,
}

/// Records read from one input file.
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    pub records: Vec<InputRecord>,
    /// Lines dropped under `MalformedLines::Skip`.
    pub skipped: usize,
}

/// Reads every record from the JSON-lines file at `path`. Blank lines are ignored.
pub fn read_input(path: &Path, malformed: MalformedLines) -> Result<SourceBatch, BatchError> {
    let file = File::open(path).map_err(|source| BatchError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(BufReader::new(file), path, malformed)
}

/// Reads records from any buffered reader; `path` is only used in errors and logs.
///
/// Lines are taken as raw bytes, so a line that is not UTF-8 counts as a
/// malformed record rather than a read failure.
pub fn read_records<R: BufRead>(
    reader: R,
    path: &Path,
    malformed: MalformedLines,
) -> Result<SourceBatch, BatchError> {
    let mut batch = SourceBatch::default();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<InputRecord>(line) {
            Ok(record) => batch.records.push(record),
            Err(source) if malformed == MalformedLines::Skip => {
                tracing::warn!(
                    "skipping malformed record at {}:{}: {}",
                    path.display(),
                    idx + 1,
                    source
                );
                batch.skipped += 1;
            }
            Err(source) => {
                return Err(BatchError::Malformed {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                })
            }
        }
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INPUT: &str = r#"{"row_id": 1, "is_sample": false, "raw_url": "https://a.com/p?a=1"}

{"row_id": 2, "is_sample": true, "raw_url": "https://b.com/"}
"#;

    #[test]
    fn reads_lines_and_skips_blanks() {
        let batch = read_records(INPUT.as_bytes(), Path::new("mem"), MalformedLines::Fail).unwrap();
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[1], InputRecord::new(2, true, "https://b.com/"));
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn malformed_line_fails_with_line_number() {
        let input = "{\"row_id\": 1, \"is_sample\": false, \"raw_url\": \"x\"}\n{\"row_id\": \"two\"}\n";
        let err = read_records(input.as_bytes(), Path::new("in.json"), MalformedLines::Fail)
            .unwrap_err();
        match err {
            BatchError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn malformed_line_skipped_when_configured() {
        let input = "not json\n{\"row_id\": 1, \"is_sample\": false, \"raw_url\": \"x\"}\n";
        let batch = read_records(input.as_bytes(), Path::new("in.json"), MalformedLines::Skip)
            .unwrap();
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn non_utf8_line_is_a_malformed_record() {
        let input: &[u8] = b"{\"row_id\": 1, \"is_sample\": false, \"raw_url\": \"a\"}\n\xff\xfe garbage\n{\"row_id\": 3, \"is_sample\": true, \"raw_url\": \"b\"}\n";

        let batch = read_records(input, Path::new("in.json"), MalformedLines::Skip).unwrap();
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[1].row_id, 3);
        assert_eq!(batch.skipped, 1);

        let err = read_records(input, Path::new("in.json"), MalformedLines::Fail).unwrap_err();
        match err {
            BatchError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn crlf_line_endings() {
        let input = "{\"row_id\": 1, \"is_sample\": false, \"raw_url\": \"a\"}\r\n\r\n";
        let batch = read_records(input.as_bytes(), Path::new("in.json"), MalformedLines::Fail)
            .unwrap();
        assert_eq!(batch.records.len(), 1);
    }

    #[test]
    fn read_input_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(INPUT.as_bytes()).unwrap();
        f.flush().unwrap();
        let batch = read_input(f.path(), MalformedLines::Fail).unwrap();
        assert_eq!(batch.records.len(), 2);
    }

    #[test]
    fn read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("nope.json"), MalformedLines::Fail).unwrap_err();
        assert!(matches!(err, BatchError::Open { .. }));
    }
}
