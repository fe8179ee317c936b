//! Error types for key-score evaluation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading and scoring a batch of key estimates
#[derive(Error, Debug)]
pub enum EvalError {
    /// Input file is missing or unreadable
    #[error("input access error: cannot read {}", path.display())]
    InputAccess {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Line lacks the expected field structure or a key token cannot be decoded
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Key token decoded but its position or mode letter is not valid
    #[error("invalid key range at line {line}: {reason}")]
    InvalidKeyRange {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the key
        reason: String,
    },

    /// Ground-truth and estimate columns cannot be paired positionally
    #[error("length mismatch: {ground_truth} ground-truth keys but {estimates} estimates")]
    LengthMismatch {
        /// Number of ground-truth entries
        ground_truth: usize,
        /// Number of estimate entries
        estimates: usize,
    },

    /// Writing the report failed
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl EvalError {
    /// Line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            EvalError::MalformedRecord { line, .. } | EvalError::InvalidKeyRange { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
