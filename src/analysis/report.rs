//! Report formatting
//!
//! Text layout, one line per record:
//!
//! ```text
//! <truth> <estimate> <score> <label>
//! ```
//!
//! followed by four summary lines: total score, normalized score, record
//! count, and the correct/compatible/incorrect split. JSON layout writes the
//! same content as one object per line.

use std::io::{self, Write};

use super::record::ScoreRecord;
use super::summary::EvaluationSummary;
use crate::config::ReportFormat;

/// Write one record line
pub fn write_record<W: Write>(
    out: &mut W,
    format: ReportFormat,
    record: &ScoreRecord,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => writeln!(
            out,
            "{} {} {:.1} {}",
            record.ground_truth, record.estimated, record.score, record.metadata
        ),
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)
        }
    }
}

/// Write the summary block
pub fn write_summary<W: Write>(
    out: &mut W,
    format: ReportFormat,
    summary: &EvaluationSummary,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(out, "mirex score: {:.4}", summary.total_score)?;
            match summary.normalized_score() {
                Some(normalized) => writeln!(out, "mirex score normalized: {:.4}", normalized)?,
                None => writeln!(out, "mirex score normalized: n/a (no records)")?,
            }
            writeln!(out, "{}", summary.record_count)?;
            writeln!(
                out,
                "correct: {} compatible: {} incorrect: {}",
                summary.exact_match_count,
                summary.compatible_count,
                summary.incorrect_count()
            )
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, &summary.report())?;
            writeln!(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_record_line() {
        let record = ScoreRecord::new(1, "8B".parse().unwrap(), "8B".parse().unwrap(), "trackA");
        let text = render(|out| write_record(out, ReportFormat::Text, &record));
        assert_eq!(text, "8B 8B 1.0 trackA\n");
    }

    #[test]
    fn test_text_record_puts_truth_first() {
        let record = ScoreRecord::new(1, "8A".parse().unwrap(), "8B".parse().unwrap(), "trackC");
        let text = render(|out| write_record(out, ReportFormat::Text, &record));
        assert_eq!(text, "8B 8A 0.3 trackC\n");
    }

    #[test]
    fn test_text_summary() {
        let mut summary = EvaluationSummary::new();
        summary.add(&ScoreRecord::new(1, "8B".parse().unwrap(), "8B".parse().unwrap(), "a"));
        summary.add(&ScoreRecord::new(2, "9B".parse().unwrap(), "8B".parse().unwrap(), "b"));
        let text = render(|out| write_summary(out, ReportFormat::Text, &summary));
        assert_eq!(
            text,
            "mirex score: 1.5000\n\
             mirex score normalized: 0.7500\n\
             2\n\
             correct: 1 compatible: 1 incorrect: 0\n"
        );
    }

    #[test]
    fn test_text_summary_empty_run() {
        let text = render(|out| write_summary(out, ReportFormat::Text, &EvaluationSummary::new()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "mirex score normalized: n/a (no records)");
        assert_eq!(lines[2], "0");
    }

    #[test]
    fn test_json_lines() {
        let record = ScoreRecord::new(3, "3A".parse().unwrap(), "8B".parse().unwrap(), "trackD");
        let mut summary = EvaluationSummary::new();
        summary.add(&record);

        let text = render(|out| {
            write_record(out, ReportFormat::Json, &record)?;
            write_summary(out, ReportFormat::Json, &summary)
        });
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["metadata"], "trackD");
        assert_eq!(lines[0]["relation"], "unrelated");
        assert_eq!(lines[0]["line"], 3);
        assert_eq!(lines[1]["incorrect"], 1);
        assert_eq!(lines[1]["normalized_score"], 0.0);
    }
}
