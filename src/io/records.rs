//! Key-estimate listing reader
//!
//! Each line holds one record:
//!
//! ```text
//! <truth key>-<unused>-<label>;<estimated key>[;<ignored>...]
//! ```
//!
//! e.g. `8B-x-trackA.wav;9B;128;true`. The first field is usually the audio
//! file name with the reference key as its prefix; the fields after the
//! estimate are whatever else the detector logged (BPM, tag status).

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::EvalError;

/// One tokenized input record
///
/// Key tokens are kept as text here; decoding into keys happens in the
/// evaluator so that every token error carries its line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source
    pub line: usize,
    /// Ground-truth key token
    pub ground_truth: String,
    /// Estimated key token
    pub estimated: String,
    /// Pass-through label shown in the per-record report
    pub metadata: String,
}

/// Parse a single line
///
/// Returns `Ok(None)` for blank lines.
///
/// # Errors
///
/// Returns `EvalError::MalformedRecord` if the line lacks the `;` separator or
/// the first field does not have three `-`-separated parts.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<RawRecord>, EvalError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let malformed = |reason: &str| EvalError::MalformedRecord {
        line: line_no,
        reason: reason.to_string(),
    };

    let (head, rest) = line
        .split_once(';')
        .ok_or_else(|| malformed("missing ';' between reference and estimate fields"))?;

    // Only the first field after the separator is the estimate
    let estimated = rest.split(';').next().unwrap_or_default().trim();

    let parts: Vec<&str> = head.splitn(3, '-').collect();
    if parts.len() < 3 {
        return Err(malformed(
            "first field must be '<key>-<field>-<label>' (three '-'-separated parts)",
        ));
    }

    Ok(Some(RawRecord {
        line: line_no,
        ground_truth: parts[0].trim().to_string(),
        estimated: estimated.to_string(),
        metadata: parts[2].trim().to_string(),
    }))
}

/// Parse a whole listing, in input order
///
/// Blank lines are skipped; line numbers still count them.
///
/// # Errors
///
/// Fails on the first malformed line.
pub fn parse_records(input: &str) -> Result<Vec<RawRecord>, EvalError> {
    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if let Some(record) = parse_line(idx + 1, line)? {
            records.push(record);
        }
    }
    log::debug!("Parsed {} records", records.len());
    Ok(records)
}

/// Read and parse a listing file
///
/// # Errors
///
/// Returns `EvalError::InputAccess` if the file cannot be read, or the first
/// parse error otherwise.
///
/// Bytes that are not valid UTF-8 (e.g. cp1252 file names in the label) are
/// replaced with U+FFFD. Key tokens are still validated, so an undecodable
/// key fails as a malformed record on its own line.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, EvalError> {
    let path = path.as_ref();
    log::debug!("Reading records from {}", path.display());

    let bytes = fs::read(path).map_err(|source| EvalError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let input = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = input {
        log::warn!(
            "{} is not valid UTF-8; undecodable bytes replaced",
            path.display()
        );
    }

    parse_records(&input)
}

/// Pair separately collected ground-truth and estimate columns by position
///
/// `ground_truth` holds `(key, label)` entries. Entry `i` of each column forms
/// record `i` (line number `i + 1`).
///
/// # Errors
///
/// Returns `EvalError::LengthMismatch` if the columns differ in length.
pub fn pair_columns(
    ground_truth: Vec<(String, String)>,
    estimates: Vec<String>,
) -> Result<Vec<RawRecord>, EvalError> {
    if ground_truth.len() != estimates.len() {
        return Err(EvalError::LengthMismatch {
            ground_truth: ground_truth.len(),
            estimates: estimates.len(),
        });
    }

    Ok(ground_truth
        .into_iter()
        .zip(estimates)
        .enumerate()
        .map(|(idx, ((truth, metadata), estimated))| RawRecord {
            line: idx + 1,
            ground_truth: truth,
            estimated,
            metadata,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let record = parse_line(1, "8B-x-trackA;8B").unwrap().unwrap();
        assert_eq!(
            record,
            RawRecord {
                line: 1,
                ground_truth: "8B".to_string(),
                estimated: "8B".to_string(),
                metadata: "trackA".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_line_keeps_hyphens_in_label_and_ignores_extra_fields() {
        let record = parse_line(4, "11A-01-some-track name.wav;10A;128;true\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(record.ground_truth, "11A");
        assert_eq!(record.estimated, "10A");
        assert_eq!(record.metadata, "some-track name.wav");
        assert_eq!(record.line, 4);
    }

    #[test]
    fn test_parse_line_blank() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, "   \t").unwrap(), None);
    }

    #[test]
    fn test_parse_line_missing_separator() {
        let err = parse_line(3, "8B-x-trackA 8B").unwrap_err();
        assert!(matches!(err, EvalError::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn test_parse_line_too_few_parts() {
        let err = parse_line(2, "8B-trackA;8B").unwrap_err();
        assert!(matches!(err, EvalError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_parse_records_preserves_order_and_line_numbers() {
        let input = "8B-x-a;8B\n\n9A-x-b;3A\n1B-x-c;1A\n";
        let records = parse_records(input).unwrap();
        let labels: Vec<&str> = records.iter().map(|r| r.metadata.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        let lines: Vec<usize> = records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_parse_records_stops_at_first_error() {
        let err = parse_records("8B-x-a;8B\nbroken\n9A-x-b;3A\n").unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_read_records_missing_file() {
        let err = read_records("/nonexistent/listing.txt").unwrap_err();
        assert!(matches!(err, EvalError::InputAccess { .. }));
    }

    #[test]
    fn test_read_records_non_utf8_label() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("listing.txt");
        fs::write(&path, b"8B-01-ok.wav;8B\n8B-02-Beyonc\xe9.wav;9B\n").unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[1].ground_truth, "8B");
        assert_eq!(records[1].estimated, "9B");
        assert_eq!(records[1].metadata, "Beyonc\u{FFFD}.wav");
    }

    #[test]
    fn test_read_records_non_utf8_key_keeps_line() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("listing.txt");
        fs::write(&path, b"8B-01-ok.wav;8B\n8B-02-x.wav;9\xe9B\n").unwrap();

        // Label parsing succeeds; the key token itself fails when decoded
        let records = read_records(&path).unwrap();
        assert_eq!(records[1].estimated, "9\u{FFFD}B");
        assert!(records[1].estimated.parse::<crate::key::CamelotKey>().is_err());
    }

    #[test]
    fn test_pair_columns() {
        let truth = vec![
            ("8B".to_string(), "a".to_string()),
            ("3A".to_string(), "b".to_string()),
        ];
        let records = pair_columns(truth, vec!["9B".to_string(), "3A".to_string()]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[1].ground_truth, "3A");
        assert_eq!(records[1].metadata, "b");
        assert_eq!(records[0].estimated, "9B");
    }

    #[test]
    fn test_pair_columns_length_mismatch() {
        let truth = vec![("8B".to_string(), "a".to_string())];
        let err = pair_columns(truth, vec![]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::LengthMismatch {
                ground_truth: 1,
                estimates: 0
            }
        ));
    }
}
