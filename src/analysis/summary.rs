//! Batch summary accumulation

use serde::Serialize;

use super::record::ScoreRecord;
use crate::key::KeyRelation;

/// Per-relation tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelationCounts {
    /// Exact matches
    pub exact: usize,
    /// Dominant/subdominant confusions
    pub fifth: usize,
    /// Relative major/minor confusions
    pub relative: usize,
    /// Parallel major/minor confusions
    pub parallel: usize,
    /// Unrelated estimates
    pub unrelated: usize,
}

impl RelationCounts {
    fn record(&mut self, relation: KeyRelation) {
        match relation {
            KeyRelation::Exact => self.exact += 1,
            KeyRelation::Fifth => self.fifth += 1,
            KeyRelation::Relative => self.relative += 1,
            KeyRelation::Parallel => self.parallel += 1,
            KeyRelation::Unrelated => self.unrelated += 1,
        }
    }

    /// Sum over all relations
    pub fn total(&self) -> usize {
        self.exact + self.fifth + self.relative + self.parallel + self.unrelated
    }
}

/// Aggregate over all scored records of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationSummary {
    /// Sum of all record scores
    pub total_score: f64,
    /// Number of records scored
    pub record_count: usize,
    /// Records scoring 1.0
    pub exact_match_count: usize,
    /// Records scoring above 0.0 but below 1.0
    pub compatible_count: usize,
    /// Breakdown by relation
    pub relations: RelationCounts,
}

/// Serializable view of a finished summary, derived fields included
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Sum of all record scores
    pub total_score: f64,
    /// `total_score / record_count`, absent for an empty run
    pub normalized_score: Option<f64>,
    /// Mean of `1 - score`, absent for an empty run
    pub mean_loss: Option<f64>,
    /// Number of records scored
    pub record_count: usize,
    /// Exact matches
    pub correct: usize,
    /// Partially credited matches
    pub compatible: usize,
    /// Unrelated estimates
    pub incorrect: usize,
    /// Breakdown by relation
    pub relations: RelationCounts,
}

impl EvaluationSummary {
    /// Empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the totals
    pub fn add(&mut self, record: &ScoreRecord) {
        self.total_score += record.score;
        self.record_count += 1;
        if record.relation == KeyRelation::Exact {
            self.exact_match_count += 1;
        } else if record.relation.is_compatible() {
            self.compatible_count += 1;
        }
        self.relations.record(record.relation);
    }

    /// True if no records were scored
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Records with no graded relation
    pub fn incorrect_count(&self) -> usize {
        self.record_count
            .saturating_sub(self.exact_match_count)
            .saturating_sub(self.compatible_count)
    }

    /// Mean score, or `None` for an empty run
    pub fn normalized_score(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.total_score / self.record_count as f64)
    }

    /// Mean loss (`1 - score`), or `None` for an empty run
    pub fn mean_loss(&self) -> Option<f64> {
        self.normalized_score().map(|score| 1.0 - score)
    }

    /// Finished view with derived fields filled in
    pub fn report(&self) -> SummaryReport {
        SummaryReport {
            total_score: self.total_score,
            normalized_score: self.normalized_score(),
            mean_loss: self.mean_loss(),
            record_count: self.record_count,
            correct: self.exact_match_count,
            compatible: self.compatible_count,
            incorrect: self.incorrect_count(),
            relations: self.relations,
        }
    }
}
