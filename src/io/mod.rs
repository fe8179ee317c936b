//! Record I/O
//!
//! Reading key-estimate listings into tokenized records.

pub mod records;

pub use records::{pair_columns, parse_line, parse_records, read_records, RawRecord};
