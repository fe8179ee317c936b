//! MIREX key-relation scoring
//!
//! Grades a key estimate against a reference key by harmonic closeness:
//!
//! | Relation | Score |
//! |---|---|
//! | Exact match | 1.0 |
//! | Perfect fifth / fourth (dominant, subdominant) | 0.5 |
//! | Relative major/minor | 0.3 |
//! | Parallel major/minor | 0.2 |
//! | Anything else | 0.0 |

use serde::{Deserialize, Serialize};

use super::camelot::{CamelotKey, Mode};

/// Harmonic relation between an estimated key and a reference key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRelation {
    /// Same position, same mode
    Exact,
    /// Same position, different mode
    Relative,
    /// Adjacent positions, same mode
    Fifth,
    /// Same tonic, different mode (three positions apart on the wheel)
    Parallel,
    /// No graded relation
    Unrelated,
}

impl KeyRelation {
    /// MIREX score for this relation
    pub fn score(self) -> f64 {
        match self {
            KeyRelation::Exact => 1.0,
            KeyRelation::Fifth => 0.5,
            KeyRelation::Relative => 0.3,
            KeyRelation::Parallel => 0.2,
            KeyRelation::Unrelated => 0.0,
        }
    }

    /// Complement of the score, as minimized when tuning a detector
    pub fn loss(self) -> f64 {
        1.0 - self.score()
    }

    /// Partial credit: related but not an exact match
    pub fn is_compatible(self) -> bool {
        !matches!(self, KeyRelation::Exact | KeyRelation::Unrelated)
    }
}

/// Classify the relation of `estimated` to `ground_truth`
///
/// Rules are checked in priority order and the first match wins, so a pair is
/// always reported under its strongest relation.
pub fn classify(estimated: &CamelotKey, ground_truth: &CamelotKey) -> KeyRelation {
    let est = estimated.position() as i32;
    let truth = ground_truth.position() as i32;
    let same_mode = estimated.mode() == ground_truth.mode();

    if estimated == ground_truth {
        return KeyRelation::Exact;
    }

    if est == truth {
        return KeyRelation::Relative;
    }

    // 12 and 1 are neighbours on the wheel
    if same_mode && ((est - truth).rem_euclid(12) == 1 || (truth - est).rem_euclid(12) == 1) {
        return KeyRelation::Fifth;
    }

    let parallel = match (estimated.mode(), ground_truth.mode()) {
        (Mode::Minor, Mode::Major) => (est + 3) % 12 == truth % 12,
        (Mode::Major, Mode::Minor) => est % 12 == (truth + 3) % 12,
        _ => false,
    };
    if parallel {
        return KeyRelation::Parallel;
    }

    KeyRelation::Unrelated
}

/// MIREX score of `estimated` against `ground_truth`
///
/// # Example
///
/// ```
/// use mirex_eval::key::{mirex_score, CamelotKey};
///
/// let truth: CamelotKey = "8B".parse()?;
/// assert_eq!(mirex_score(&"8B".parse()?, &truth), 1.0);
/// assert_eq!(mirex_score(&"9B".parse()?, &truth), 0.5);
/// assert_eq!(mirex_score(&"8A".parse()?, &truth), 0.3);
/// assert_eq!(mirex_score(&"3A".parse()?, &truth), 0.0);
/// # Ok::<(), mirex_eval::key::KeyParseError>(())
/// ```
pub fn mirex_score(estimated: &CamelotKey, ground_truth: &CamelotKey) -> f64 {
    classify(estimated, ground_truth).score()
}
