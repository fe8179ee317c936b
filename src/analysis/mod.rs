//! Evaluation and result aggregation modules
//!
//! Scores key estimates against references and aggregates the run:
//! - Scored records
//! - Summary accumulation
//! - Report formatting
//! - Batch evaluator

pub mod evaluator;
pub mod record;
pub mod report;
pub mod summary;

pub use evaluator::BatchEvaluator;
pub use record::ScoreRecord;
pub use summary::{EvaluationSummary, RelationCounts, SummaryReport};
