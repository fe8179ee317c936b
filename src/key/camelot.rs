//! Camelot wheel key notation
//!
//! A Camelot key is a wheel position (1-12) plus a ring letter: `A` for the
//! outer minor ring, `B` for the inner major ring. Adjacent positions are a
//! perfect fifth apart; the two keys sharing a position are relative
//! major/minor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Note names indexed by pitch class (0 = C, ..., 11 = B)
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Key mode, encoded by the Camelot ring letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Minor key (`A`, outer ring)
    Minor,
    /// Major key (`B`, inner ring)
    Major,
}

impl Mode {
    /// Camelot ring letter for this mode
    pub fn letter(self) -> char {
        match self {
            Mode::Minor => 'A',
            Mode::Major => 'B',
        }
    }

    /// Mode for a ring letter. Case-sensitive: only `A` and `B` are recognized.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Mode::Minor),
            'B' => Some(Mode::Major),
            _ => None,
        }
    }
}

/// Errors produced when decoding a Camelot key token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    /// Token does not have the `<position><letter>` shape
    #[error("malformed key '{token}': {reason}")]
    Malformed {
        /// Offending token
        token: String,
        /// Which part of the shape is missing
        reason: &'static str,
    },

    /// Position decoded but falls outside 1-12
    #[error("key '{token}' has position outside 1-12")]
    OutOfRange {
        /// Offending token
        token: String,
    },

    /// Mode letter is not `A` or `B`
    #[error("key '{token}' has unknown mode letter '{letter}' (expected 'A' or 'B')")]
    UnknownMode {
        /// Offending token
        token: String,
        /// Letter found in the mode slot
        letter: char,
    },
}

impl KeyParseError {
    /// True when the token had the right shape but a value outside the valid set
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            KeyParseError::OutOfRange { .. } | KeyParseError::UnknownMode { .. }
        )
    }
}

/// Musical key in Camelot wheel notation
///
/// Construction always validates, so a `CamelotKey` value is guaranteed to have
/// a position in 1-12.
///
/// # Example
///
/// ```
/// use mirex_eval::key::{CamelotKey, Mode};
///
/// let key: CamelotKey = "8A".parse()?;
/// assert_eq!(key.position(), 8);
/// assert_eq!(key.mode(), Mode::Minor);
/// assert_eq!(key.name(), "Am");
/// assert_eq!(key.to_string(), "8A");
/// # Ok::<(), mirex_eval::key::KeyParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CamelotKey {
    position: u8,
    mode: Mode,
}

impl CamelotKey {
    /// Build a key from a wheel position (1-12) and mode
    pub fn new(position: u8, mode: Mode) -> Result<Self, KeyParseError> {
        if !(1..=12).contains(&position) {
            return Err(KeyParseError::OutOfRange {
                token: format!("{}{}", position, mode.letter()),
            });
        }
        Ok(Self { position, mode })
    }

    /// Wheel position (1-12)
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Major or minor
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pitch class of the tonic (0 = C, 1 = C#, ..., 11 = B)
    ///
    /// 8B is C major and every step clockwise moves the tonic up a fifth.
    /// The minor key at a position is the relative minor of the major key,
    /// a minor third (9 semitones up) from its tonic.
    pub fn tonic(&self) -> u8 {
        let major_tonic = (7 * (self.position as u32 + 4)) % 12;
        match self.mode {
            Mode::Major => major_tonic as u8,
            Mode::Minor => ((major_tonic + 9) % 12) as u8,
        }
    }

    /// Key name in musical notation (e.g., "C", "Am", "F#m")
    pub fn name(&self) -> String {
        let note = NOTE_NAMES[self.tonic() as usize];
        match self.mode {
            Mode::Major => note.to_string(),
            Mode::Minor => format!("{}m", note),
        }
    }

    /// All 24 keys, minor before major at each position
    pub fn all() -> impl Iterator<Item = CamelotKey> {
        (1..=12u8).flat_map(|position| {
            [Mode::Minor, Mode::Major]
                .into_iter()
                .map(move |mode| CamelotKey { position, mode })
        })
    }
}

impl fmt::Display for CamelotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position, self.mode.letter())
    }
}

impl FromStr for CamelotKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let malformed = |reason| KeyParseError::Malformed {
            token: token.to_string(),
            reason,
        };

        let letter = token.chars().next_back().ok_or_else(|| malformed("empty key token"))?;
        if letter.is_ascii_digit() {
            return Err(malformed("missing mode letter"));
        }

        let digits = &token[..token.len() - letter.len_utf8()];
        if digits.is_empty() {
            return Err(malformed("missing position"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("non-numeric position"));
        }

        let mode = Mode::from_letter(letter).ok_or_else(|| KeyParseError::UnknownMode {
            token: token.to_string(),
            letter,
        })?;

        // All-digit strings only fail to parse on overflow
        let position = digits
            .parse::<u8>()
            .ok()
            .filter(|p| (1..=12).contains(p))
            .ok_or_else(|| KeyParseError::OutOfRange {
                token: token.to_string(),
            })?;

        Ok(Self { position, mode })
    }
}

impl TryFrom<String> for CamelotKey {
    type Error = KeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CamelotKey> for String {
    fn from(key: CamelotKey) -> Self {
        key.to_string()
    }
}
