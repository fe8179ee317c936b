//! Scored record type

use serde::Serialize;

use crate::key::{classify, CamelotKey, KeyRelation};

/// One evaluated estimate/ground-truth pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    /// 1-based line number in the source
    pub line: usize,
    /// Reference key
    pub ground_truth: CamelotKey,
    /// Detector output
    pub estimated: CamelotKey,
    /// Relation of the estimate to the reference
    pub relation: KeyRelation,
    /// MIREX score of the relation
    pub score: f64,
    /// Pass-through label from the input
    pub metadata: String,
}

impl ScoreRecord {
    /// Score `estimated` against `ground_truth`
    pub fn new(
        line: usize,
        estimated: CamelotKey,
        ground_truth: CamelotKey,
        metadata: impl Into<String>,
    ) -> Self {
        let relation = classify(&estimated, &ground_truth);
        Self {
            line,
            ground_truth,
            estimated,
            relation,
            score: relation.score(),
            metadata: metadata.into(),
        }
    }
}
