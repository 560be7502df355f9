// tests/unit_engine.rs
use std::fs;

use propcop_core::analysis::Engine;
use propcop_core::config::Config;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_scan_aggregates_files() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(
        &dir,
        "Clock.tsx",
        "class Clock extends React.Component {\n  tick() { this.forceUpdate(); }\n  render() { return <time/>; }\n}\n",
    );
    let good = write_file(
        &dir,
        "Label.tsx",
        "function Label({ text }) {\n  return <span>{text}</span>;\n}\n",
    );

    let engine = Engine::new(Config::default());
    let report = engine.scan(&[bad, good]);

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.clean_file_count(), 1);
    assert!(report.has_errors());
}

#[test]
fn test_ignore_directive_skips_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Legacy.tsx",
        "// propcop:ignore\nclass Clock extends React.Component {\n  tick() { this.forceUpdate(); }\n  render() { return <time/>; }\n}\n",
    );

    let engine = Engine::new(Config::default());
    let report = engine.scan(&[path]);

    assert_eq!(report.total_findings, 0);
}

#[test]
fn test_allow_directive_suppresses_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Clock.tsx",
        "class Clock extends React.Component {\n  tick() { this.forceUpdate(); // propcop:allow(S02)\n  }\n  render() { return <time/>; }\n}\n",
    );

    let engine = Engine::new(Config::default());
    let report = engine.scan(&[path]);

    assert_eq!(report.total_findings, 0);
}

#[test]
fn test_severity_override_remaps() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Clock.tsx",
        "class Clock extends React.Component {\n  tick() { this.forceUpdate(); }\n  render() { return <time/>; }\n}\n",
    );

    let mut config = Config::default();
    config.parse_toml("[rules.severity]\nS02 = \"info\"\n").unwrap();

    let engine = Engine::new(config);
    let report = engine.scan(&[path.clone()]);
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.info_count(), 1);

    let mut config = Config::default();
    config.parse_toml("[rules.severity]\nS02 = \"allow\"\n").unwrap();
    let engine = Engine::new(config);
    let report = engine.scan(&[path]);
    assert_eq!(report.total_findings, 0);
}

#[test]
fn test_malformed_source_is_not_an_error() {
    // tree-sitter recovers with error nodes; only grammar load failures
    // surface as Err.
    let out = propcop_core::analysis::analyze_source(
        "broken.tsx",
        propcop_core::lang::Lang::Tsx,
        "function ( { <<< return",
        &Config::default(),
    );
    assert!(out.is_ok());
}

#[test]
fn test_unreadable_file_is_empty_report() {
    let engine = Engine::new(Config::default());
    let report = engine.scan(&[std::path::PathBuf::from("does/not/exist.tsx")]);
    assert_eq!(report.files.len(), 1);
    assert!(report.files[0].is_clean());
}

#[test]
fn test_unknown_extension_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.md", "# this.forceUpdate()\n");

    let engine = Engine::new(Config::default());
    let report = engine.scan(&[path]);
    assert_eq!(report.total_findings, 0);
}

#[test]
fn test_findings_sorted_by_position() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "Mess.tsx",
        r"function Mess(props) {
  const [a] = useState(props.a);
  const [b] = useState(props.b);
  return <div>{a}{b}</div>;
}
",
    );

    let engine = Engine::new(Config::default());
    let report = engine.scan(&[path]);
    let rows: Vec<usize> = report.files[0]
        .findings
        .iter()
        .map(|f| f.span.start_row)
        .collect();
    let mut sorted = rows.clone();
    sorted.sort_unstable();
    assert_eq!(rows, sorted);
    assert_eq!(rows.len(), 2);
}
