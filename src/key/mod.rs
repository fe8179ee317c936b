//! Key notation and key-relation scoring
//!
//! - Camelot wheel keys (24 keys: 12 positions x major/minor)
//! - MIREX relation classification and scoring

pub mod camelot;
pub mod relation;

pub use camelot::{CamelotKey, KeyParseError, Mode};
pub use relation::{classify, mirex_score, KeyRelation};
