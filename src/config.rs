//! Configuration parameters for batch evaluation

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Space-separated record lines followed by a four-line summary
    #[default]
    Text,
    /// One JSON object per record line, then one JSON summary object
    Json,
}

/// Evaluation configuration parameters
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// Output format (default: Text)
    pub format: ReportFormat,

    /// Write one line per record before the summary (default: true)
    pub emit_records: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            emit_records: true,
        }
    }
}
