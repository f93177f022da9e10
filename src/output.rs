//! Output formatting for index reports.
//!
//! Supports pretty-printing, JSON serialization, and a one-line summary.

use anyhow::Result;
use tracing::{debug, info};

use crate::scoring::IndexReport;

/// Logs an index report using Rust's debug pretty-print format.
pub fn print_pretty(report: &IndexReport) {
    debug!("{:#?}", report);
}

/// Logs an index report as pretty-printed JSON.
pub fn print_json(report: &IndexReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// One-line, human-readable summary of a report.
pub fn summary(report: &IndexReport) -> String {
    let mut line = format!(
        "The index for today is {} ({}). Go bang some chains!!!",
        report.index,
        report.index.label()
    );
    if !report.excluded.is_empty() {
        let excluded: Vec<String> = report.excluded.iter().map(ToString::to_string).collect();
        line.push_str(&format!(" No data for: {}.", excluded.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{CategoryScore, Score, aggregate_report};

    fn report(air_quality: &[CategoryScore]) -> IndexReport {
        let four = [CategoryScore::Scored(Score::Moderate)];
        aggregate_report(&four, &four, &four, air_quality).unwrap()
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&report(&[]));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&report(&[])).unwrap();
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(report(&[])).unwrap();
        assert_eq!(value["index"], 4);
        assert_eq!(value["excluded"][0], "air_quality");
        assert_eq!(value["categories"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_summary_mentions_excluded_categories() {
        let line = summary(&report(&[]));
        assert!(line.starts_with("The index for today is 4 (moderate)."));
        assert!(line.ends_with("No data for: air quality."));

        let complete = summary(&report(&[Score::Moderate.into()]));
        assert!(!complete.contains("No data"));
    }
}
