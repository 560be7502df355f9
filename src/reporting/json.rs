//! Machine-readable output: the whole `ScanReport` as one JSON document.
//!
//! Nothing else may be printed to stdout in this mode; progress and
//! warnings go to stderr.

use anyhow::Result;

use crate::types::ScanReport;

/// Serializes the report to pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Prints the report as a single JSON document on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_report(report: &ScanReport) -> Result<()> {
    println!("{}", render(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileReport, Finding, Severity, Span};

    #[test]
    fn test_render_is_one_json_document() {
        let report = ScanReport {
            files: vec![FileReport {
                path: "src/Clock.tsx".into(),
                findings: vec![Finding::simple(
                    "S02",
                    "forceUpdate() call bypasses React's data flow".to_string(),
                    Span {
                        start_row: 2,
                        start_col: 3,
                        end_row: 2,
                        end_col: 21,
                    },
                    Severity::Error,
                )],
            }],
            total_findings: 1,
            duration_ms: 5,
        };

        let out = render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_findings"], 1);
        assert_eq!(value["files"][0]["findings"][0]["rule"], "S02");
        assert_eq!(value["files"][0]["findings"][0]["severity"], "error");
    }
}
