// src/types.rs
use serde::Serialize;
use std::path::PathBuf;
use tree_sitter::Node;

/// How strongly a finding should be treated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Line/column span of a finding. Rows and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Span {
    #[must_use]
    pub fn from_node(node: &Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_row: start.row + 1,
            start_col: start.column + 1,
            end_row: end.row + 1,
            end_col: end.column + 1,
        }
    }

    /// Number of source lines the span covers.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_row.saturating_sub(self.start_row) + 1
    }
}

/// A single anti-pattern occurrence. Produced by exactly one rule
/// evaluation and immutable afterwards (the engine may remap severity
/// from config before the finding leaves the file pass).
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub rule: &'static str,
    pub message: String,
    pub span: Span,
    pub severity: Severity,
    pub note: Option<String>,
}

impl Finding {
    /// Creates a finding without an explanatory note.
    #[must_use]
    pub fn simple(rule: &'static str, message: String, span: Span, severity: Severity) -> Self {
        Self { rule, message, span, severity, note: None }
    }

    /// Creates a finding with a note shown beneath the locator.
    #[must_use]
    pub fn with_note(
        rule: &'static str,
        message: String,
        span: Span,
        severity: Severity,
        note: String,
    ) -> Self {
        Self { rule, message, span, severity, note: Some(note) }
    }
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Returns true if no findings were produced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }
}

/// Aggregated results from scanning multiple files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_findings: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    #[must_use]
    pub fn info_count(&self) -> usize {
        self.count_severity(Severity::Info)
    }

    /// Returns true if any error-severity findings were produced.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    #[must_use]
    pub fn clean_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_clean()).count()
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.findings)
            .filter(|v| v.severity == severity)
            .count()
    }
}
