//! # MIREX Eval
//!
//! Scores musical key estimates against ground-truth keys with the MIREX
//! key-detection metric, which gives partial credit for harmonically related
//! confusions instead of a binary right/wrong.
//!
//! ## Features
//!
//! - **Camelot keys**: validated `<position><A|B>` parsing (`A` = minor, `B` = major)
//! - **Relation scoring**: exact 1.0, fifth 0.5, relative 0.3, parallel 0.2, otherwise 0.0
//! - **Batch evaluation**: per-record report plus total, normalized score and match counts
//!
//! ## Quick Start
//!
//! ```no_run
//! use mirex_eval::{evaluate_file, EvaluationConfig};
//!
//! let mut out = std::io::stdout();
//! let summary = evaluate_file("results.txt", EvaluationConfig::default(), &mut out)?;
//!
//! println!("normalized: {:?}", summary.normalized_score());
//! # Ok::<(), mirex_eval::EvalError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Listing file → Record parsing → Key decoding → Relation scoring → Summary → Report
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod key;

use std::io::Write;
use std::path::Path;

// Re-export main types
pub use analysis::{BatchEvaluator, EvaluationSummary, RelationCounts, ScoreRecord, SummaryReport};
pub use config::{EvaluationConfig, ReportFormat};
pub use error::EvalError;
pub use key::{classify, mirex_score, CamelotKey, KeyParseError, KeyRelation, Mode};

/// Evaluate a listing file
///
/// Reads every record from `path`, scores it and writes the report to `out`.
///
/// # Arguments
///
/// * `path` - Listing file, one `<truth>-<field>-<label>;<estimate>` record per line
/// * `config` - Output configuration
/// * `out` - Report destination
///
/// # Errors
///
/// Returns `EvalError` if the file cannot be read, any record is malformed, or
/// the report cannot be written. Nothing is written when a record is bad.
pub fn evaluate_file<W: Write>(
    path: impl AsRef<Path>,
    config: EvaluationConfig,
    out: &mut W,
) -> Result<EvaluationSummary, EvalError> {
    let records = io::read_records(path)?;
    BatchEvaluator::new(config).evaluate(&records, out)
}
