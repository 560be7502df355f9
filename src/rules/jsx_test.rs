// src/rules/jsx_test.rs

use crate::analysis::analyze_source;
use crate::config::Config;
use crate::lang::Lang;
use crate::types::Finding;

fn findings(code: &str, rule: &str) -> Vec<Finding> {
    analyze_source("test.tsx", Lang::Tsx, code, &Config::default())
        .unwrap()
        .into_iter()
        .filter(|f| f.rule == rule)
        .collect()
}

#[test]
fn test_duplicate_fragment_reported_once() {
    let code = r#"
function CardA() {
  return (
    <div className="card">
      <h2>Title</h2>
      <p>Body</p>
    </div>
  );
}
function CardB() {
  return (
    <div className="card">
      <h2>Title</h2>
      <p>Body</p>
    </div>
  );
}
"#;
    let out = findings(code, "J01");
    assert_eq!(out.len(), 1);
    // The later occurrence points back at the first.
    assert!(out[0].message.contains("first seen at line 4"));
    assert_eq!(out[0].span.start_row, 12);
}

#[test]
fn test_duplicate_survives_indentation_changes() {
    let code = r#"
function CardA() {
  return (
    <div className="card">
      <h2>Title</h2>
      <p>Body</p>
    </div>
  );
}
function CardB() {
  return (
      <div className="card">
          <h2>Title</h2>
          <p>Body</p>
      </div>
  );
}
"#;
    assert_eq!(findings(code, "J01").len(), 1);
}

#[test]
fn test_short_fragments_not_duplicates() {
    let code = r"
function Row() {
  return <li>item</li>;
}
function OtherRow() {
  return <li>item</li>;
}
";
    assert!(findings(code, "J01").is_empty());
}

#[test]
fn test_different_fragments_clean() {
    let code = r#"
function CardA() {
  return (
    <div className="card">
      <h2>Title</h2>
      <p>Body</p>
    </div>
  );
}
function CardB() {
  return (
    <div className="card">
      <h2>Other</h2>
      <p>Text</p>
    </div>
  );
}
"#;
    assert!(findings(code, "J01").is_empty());
}

#[test]
fn test_index_as_key() {
    let code = r"
function List({ items }) {
  return (
    <ul>
      {items.map((item, index) => (
        <li key={index}>{item.label}</li>
      ))}
    </ul>
  );
}
";
    let out = findings(code, "J02");
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("index"));
}

#[test]
fn test_stable_id_key_clean() {
    let code = r"
function List({ items }) {
  return (
    <ul>
      {items.map((item, index) => (
        <li key={item.id}>{item.label}</li>
      ))}
    </ul>
  );
}
";
    assert!(findings(code, "J02").is_empty());
}

#[test]
fn test_item_identifier_key_clean() {
    // Keying on the item itself is not the index smell.
    let code = r"
function List({ items }) {
  return (
    <ul>
      {items.map((item, i) => (
        <li key={item}>{item}</li>
      ))}
    </ul>
  );
}
";
    assert!(findings(code, "J02").is_empty());
}

#[test]
fn test_index_key_outside_component_clean() {
    let code = r"
function renderRows(rows) {
  return rows.map((row, i) => <tr key={i}>{row}</tr>);
}
";
    assert!(findings(code, "J02").is_empty());
}

#[test]
fn test_identifier_key_outside_map_clean() {
    let code = r"
function Row({ id, label }) {
  return <li key={id}>{label}</li>;
}
";
    assert!(findings(code, "J02").is_empty());
}
