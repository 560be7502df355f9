use crate::reporting::guidance::get_guidance;
use crate::reporting::shared::{
    collect_findings, duration, next_occurrence, pluralize, rule_counts,
};
use crate::types::{Finding, ScanReport, Severity};
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Prints a formatted scan report to stdout. The first occurrence of each
/// rule gets the full educational block; later ones get a compact
/// back-reference.
pub fn print_report(report: &ScanReport) {
    if report.total_findings > 0 {
        print_findings_grouped(report);
    }
    print_summary(report);
}

fn print_findings_grouped(report: &ScanReport) {
    let all = collect_findings(report);
    let counts = rule_counts(&all);

    let mut shown: HashMap<&'static str, usize> = HashMap::new();

    for (path, f) in &all {
        let total = counts.get(f.rule).copied().unwrap_or(1);
        let occurrence = next_occurrence(&mut shown, f.rule);

        if occurrence == 1 {
            print_finding_full(path, f, occurrence, total);
        } else {
            print_finding_compact(path, f, occurrence, total);
        }
    }
}

fn print_header(f: &Finding, count_label: &str) {
    let header = format!("{}:{count_label} {}", f.severity.label(), f.message);
    match f.severity {
        Severity::Error => println!("{}", header.red().bold()),
        Severity::Warning => println!("{}", header.yellow()),
        Severity::Info => println!("{}", header.dimmed()),
    }
}

fn print_finding_full(path: &Path, f: &Finding, occurrence: usize, total: usize) {
    let count_label = if total > 1 {
        format!(" [{occurrence} of {total}]")
    } else {
        String::new()
    };
    print_header(f, &count_label);

    println!(
        "  {} {}:{}:{}",
        "-->".blue(),
        path.display(),
        f.span.start_row,
        f.span.start_col
    );
    print_snippet(path, f.span.start_row);

    println!("   {} {}", "=".blue(), f.rule.yellow());

    if let Some(ref note) = f.note {
        println!("   {}", "|".blue());
        println!("   {} {} {}", "=".blue(), "NOTE:".cyan(), note.dimmed());
    }

    if let Some(guidance) = get_guidance(f.rule) {
        println!("   {}", "|".blue());
        println!("   {} {} {}", "=".blue(), "WHY:".cyan(), guidance.why);
        println!("   {}", "|".blue());
        println!("   {} {} {}", "=".blue(), "FIX:".green(), guidance.fix);
    }

    println!("   {}", "|".blue());
    println!(
        "   {} {} {}",
        "=".blue(),
        "SUPPRESS:".dimmed(),
        format!(
            "// propcop:allow({}) on the line, or {} = \"allow\" in propcop.toml [rules.severity]",
            f.rule, f.rule
        )
        .dimmed()
    );

    println!();
}

fn print_finding_compact(path: &Path, f: &Finding, occurrence: usize, total: usize) {
    print_header(f, &format!(" [{occurrence} of {total}]"));

    println!(
        "  {} {}:{}:{}",
        "-->".blue(),
        path.display(),
        f.span.start_row,
        f.span.start_col
    );
    println!(
        "   {} {}: see first {} above",
        "=".blue(),
        f.rule.yellow(),
        f.rule
    );

    println!();
}

fn print_snippet(path: &Path, row: usize) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    let lines: Vec<&str> = content.lines().collect();

    let idx = row.saturating_sub(1);
    let start = idx.saturating_sub(1);
    let end = (idx + 1).min(lines.len().saturating_sub(1));

    println!("   {}", "|".blue());

    for i in start..=end {
        if let Some(line) = lines.get(i) {
            let line_num = i + 1;
            let gutter = format!("{line_num:3} |");

            if i == idx {
                println!("   {} {}", gutter.blue(), line);
                let trimmed = line.trim_start();
                let padding = line.len() - trimmed.len();
                let underline_len = trimmed.len().max(1);
                let spaces = " ".repeat(padding);
                let carets = "^".repeat(underline_len);
                println!("   {} {}{}", "|".blue(), spaces, carets.red().bold());
            } else {
                println!("   {} {}", gutter.blue().dimmed(), line.dimmed());
            }
        }
    }
}

fn print_summary(report: &ScanReport) {
    let duration = duration(report);

    let errors = report.error_count();
    let warnings = report.warning_count();
    let infos = report.info_count();

    if errors == 0 && warnings == 0 && infos == 0 {
        println!(
            "{} No findings in {} {} ({duration:?}).",
            "OK".green().bold(),
            report.files.len(),
            pluralize("file", report.files.len())
        );
        return;
    }

    let mut parts: Vec<String> = Vec::new();
    if errors > 0 {
        parts.push(format!("{} {}", errors, pluralize("error", errors)));
    }
    if warnings > 0 {
        parts.push(format!("{} {}", warnings, pluralize("warning", warnings)));
    }
    if infos > 0 {
        parts.push(format!("{infos} {}", pluralize("suggestion", infos)));
    }

    let summary = parts.join(", ");

    if errors > 0 {
        println!(
            "{} propcop found {summary} ({duration:?}).",
            "X".red().bold()
        );
    } else {
        println!(
            "{} propcop found {summary} ({duration:?}).",
            "~".yellow().bold()
        );
    }
}
