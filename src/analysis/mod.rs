// src/analysis/mod.rs
//! The detector engine: parses each file once and dispatches every node
//! of the single traversal to the rules interested in its kind.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tree_sitter::{Node, Parser};

use crate::config::Config;
use crate::error::{PropcopError, Result};
use crate::lang::Lang;
use crate::rules::{self, RuleContext};
use crate::types::{FileReport, Finding, ScanReport};

pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scans files in parallel; analysis within one file is sequential.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> ScanReport {
        let start = std::time::Instant::now();

        let results: Vec<FileReport> = files
            .par_iter()
            .map(|path| self.analyze_file(path))
            .collect();

        ScanReport {
            total_findings: results.iter().map(|r| r.findings.len()).sum(),
            files: results,
            duration_ms: start.elapsed().as_millis(),
        }
    }

    /// Analyzes one file. Unreadable or unparseable files produce an empty
    /// report (and a verbose-mode warning) rather than an error; CI runs
    /// should not die on a single broken symlink.
    #[must_use]
    pub fn analyze_file(&self, path: &Path) -> FileReport {
        let mut report = FileReport {
            path: path.to_path_buf(),
            findings: Vec::new(),
        };

        let Ok(source) = std::fs::read_to_string(path) else {
            if self.config.verbose {
                eprintln!("WARN: could not read {}", path.display());
            }
            return report;
        };

        if has_ignore_directive(&source) {
            return report;
        }

        let Some(lang) = path
            .extension()
            .and_then(|s| s.to_str())
            .and_then(Lang::from_ext)
        else {
            return report;
        };

        match analyze_source(&path.to_string_lossy(), lang, &source, &self.config) {
            Ok(findings) => report.findings = findings,
            Err(e) => {
                if self.config.verbose {
                    eprintln!("WARN: {e}");
                }
            }
        }
        report
    }
}

/// Parses `source` and runs the full registry over it. Exposed separately
/// so rules can be exercised on inline snippets in tests.
///
/// # Errors
/// Returns `PropcopError::Grammar` when the grammar fails to load or the
/// parser produces no tree. Malformed source is not an error; tree-sitter
/// parses it with error nodes and the rules see whatever matched.
pub fn analyze_source(
    filename: &str,
    lang: Lang,
    source: &str,
    config: &Config,
) -> Result<Vec<Finding>> {
    let mut parser = Parser::new();
    parser
        .set_language(&lang.grammar())
        .map_err(|e| PropcopError::Grammar(format!("{filename}: {e}")))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| PropcopError::Grammar(format!("{filename}: parser produced no tree")))?;
    let root = tree.root_node();

    let ctx = RuleContext::new(root, source, filename, &config.rules);
    let mut findings = Vec::new();

    preorder(root, &mut |node| {
        let kind = node.kind();
        for rule in rules::registry() {
            if rule.kinds.contains(&kind) {
                (rule.check)(node, &ctx, &mut findings);
            }
        }
    });

    findings = apply_config(findings, source, config);
    findings.sort_by_key(|f| (f.span.start_row, f.span.start_col, f.rule));
    Ok(findings)
}

/// Applies severity overrides and line-level `propcop:allow(...)`
/// suppressions.
fn apply_config(findings: Vec<Finding>, source: &str, config: &Config) -> Vec<Finding> {
    let lines: Vec<&str> = source.lines().collect();

    findings
        .into_iter()
        .filter_map(|mut f| {
            let severity = config.severity_for(f.rule, f.severity)?;
            f.severity = severity;
            if line_allows(&lines, f.span.start_row, f.rule) {
                return None;
            }
            Some(f)
        })
        .collect()
}

fn line_allows(lines: &[&str], row: usize, rule: &str) -> bool {
    lines
        .get(row.saturating_sub(1))
        .is_some_and(|line| line.contains(&format!("propcop:allow({rule})")))
}

fn has_ignore_directive(source: &str) -> bool {
    source
        .lines()
        .take(5)
        .any(|line| line.contains("propcop:ignore"))
}

/// Pre-order traversal of a subtree, including `root` itself.
pub fn preorder<'tree>(root: Node<'tree>, f: &mut impl FnMut(Node<'tree>)) {
    let mut cursor = root.walk();
    'outer: loop {
        f(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.node() == root {
                break 'outer;
            }
            if cursor.goto_next_sibling() {
                continue 'outer;
            }
            if !cursor.goto_parent() {
                break 'outer;
            }
        }
    }
}
