// src/rules/props_test.rs

use crate::analysis::analyze_source;
use crate::config::Config;
use crate::lang::Lang;
use crate::types::Finding;

fn findings(code: &str) -> Vec<Finding> {
    analyze_source("test.tsx", Lang::Tsx, code, &Config::default())
        .unwrap()
        .into_iter()
        .filter(|f| f.rule == "P01")
        .collect()
}

#[test]
fn test_unused_prop_flagged() {
    let code = r"
function Badge({ label, icon }) {
  return <span>{label}</span>;
}
";
    let out = findings(code);
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("'icon'"));
}

#[test]
fn test_all_props_used_clean() {
    let code = r"
function Badge({ label, icon }) {
  return (
    <span>
      {icon}
      {label}
    </span>
  );
}
";
    assert!(findings(code).is_empty());
}

#[test]
fn test_arrow_component() {
    let code = r"
const Tag = ({ color, size }) => <b className={color} />;
";
    let out = findings(code);
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("'size'"));
}

#[test]
fn test_rest_element_bails() {
    let code = r"
function Badge({ label, ...rest }) {
  return <span {...rest} />;
}
";
    assert!(findings(code).is_empty());
}

#[test]
fn test_aliased_prop_tracked_by_alias() {
    let code = r"
function Badge({ label: text }) {
  return <span>{text}</span>;
}
";
    assert!(findings(code).is_empty());
}

#[test]
fn test_unused_alias_reports_prop_name() {
    let code = r"
function Badge({ label: text, id }) {
  return <span>{id}</span>;
}
";
    let out = findings(code);
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("'label'"));
}

#[test]
fn test_default_value_prop() {
    let code = r"
function Badge({ label, count = 0 }) {
  return <span>{label}</span>;
}
";
    let out = findings(code);
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("'count'"));
}

#[test]
fn test_prop_used_in_nested_closure() {
    let code = r"
function Badge({ onClick }) {
  return <span onMouseDown={() => onClick()} />;
}
";
    assert!(findings(code).is_empty());
}

#[test]
fn test_lowercase_function_skipped() {
    let code = r"
function badge({ label, icon }) {
  return <span>{label}</span>;
}
";
    assert!(findings(code).is_empty());
}
