use crate::types::{Finding, ScanReport};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub(crate) fn collect_findings(report: &ScanReport) -> Vec<(&Path, &Finding)> {
    let mut all: Vec<(&Path, &Finding)> = Vec::new();
    for file in &report.files {
        for f in &file.findings {
            all.push((&file.path, f));
        }
    }
    all
}

pub(crate) fn rule_counts(all: &[(&Path, &Finding)]) -> HashMap<&'static str, usize> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for (_, f) in all {
        *counts.entry(f.rule).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn next_occurrence(
    shown: &mut HashMap<&'static str, usize>,
    rule: &'static str,
) -> usize {
    let entry = shown.entry(rule).or_insert(0);
    *entry += 1;
    *entry
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn duration(report: &ScanReport) -> Duration {
    let ms = u64::try_from(report.duration_ms).unwrap_or(u64::MAX);
    Duration::from_millis(ms)
}
