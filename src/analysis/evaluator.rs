//! Batch evaluation
//!
//! Decodes every record's key tokens, scores each pair in input order, writes
//! the per-record lines and folds each score into a running summary.

use std::io::Write;

use super::record::ScoreRecord;
use super::report::{write_record, write_summary};
use super::summary::EvaluationSummary;
use crate::config::EvaluationConfig;
use crate::error::EvalError;
use crate::io::RawRecord;
use crate::key::{CamelotKey, KeyParseError};

/// Scores a batch of estimate/ground-truth records
#[derive(Debug, Clone, Default)]
pub struct BatchEvaluator {
    config: EvaluationConfig,
}

impl BatchEvaluator {
    /// Evaluator with the given configuration
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Decode and score every record, in input order
    ///
    /// # Errors
    ///
    /// Returns the first token error as `EvalError::MalformedRecord` or
    /// `EvalError::InvalidKeyRange`, tagged with its line number.
    pub fn score_records(&self, records: &[RawRecord]) -> Result<Vec<ScoreRecord>, EvalError> {
        records
            .iter()
            .map(|raw| {
                let ground_truth = decode_key(raw.line, "ground-truth", &raw.ground_truth)?;
                let estimated = decode_key(raw.line, "estimated", &raw.estimated)?;
                Ok(ScoreRecord::new(
                    raw.line,
                    estimated,
                    ground_truth,
                    raw.metadata.as_str(),
                ))
            })
            .collect()
    }

    /// Score a batch and write the report to `out`
    ///
    /// All records are decoded before anything is written, so a bad record
    /// produces no partial report.
    ///
    /// # Errors
    ///
    /// Returns `EvalError` if any record fails to decode or the report cannot
    /// be written.
    pub fn evaluate<W: Write>(
        &self,
        records: &[RawRecord],
        out: &mut W,
    ) -> Result<EvaluationSummary, EvalError> {
        let scored = self.score_records(records)?;

        let mut summary = EvaluationSummary::new();
        for record in &scored {
            log::debug!(
                "line {}: truth {} ({}) vs estimate {} ({}) -> {:?} {:.1}",
                record.line,
                record.ground_truth,
                record.ground_truth.name(),
                record.estimated,
                record.estimated.name(),
                record.relation,
                record.score
            );
            if self.config.emit_records {
                write_record(out, self.config.format, record)?;
            }
            summary.add(record);
        }

        if summary.is_empty() {
            log::warn!("No records to evaluate; normalized score is undefined");
        } else {
            log::info!(
                "Relations: exact={} fifth={} relative={} parallel={} unrelated={}",
                summary.relations.exact,
                summary.relations.fifth,
                summary.relations.relative,
                summary.relations.parallel,
                summary.relations.unrelated
            );
        }

        write_summary(out, self.config.format, &summary)?;
        Ok(summary)
    }
}

fn decode_key(line: usize, role: &str, token: &str) -> Result<CamelotKey, EvalError> {
    token.parse().map_err(|err: KeyParseError| {
        let reason = format!("{} {}", role, err);
        if err.is_range_error() {
            EvalError::InvalidKeyRange { line, reason }
        } else {
            EvalError::MalformedRecord { line, reason }
        }
    })
}
