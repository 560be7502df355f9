// src/rules/state_test.rs

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
fn test_use_state_from_props() {
    let code = r"
function Counter(props) {
  const [count, setCount] = useState(props.initialCount);
  return <span>{count}</span>;
}
";
    let out = findings(code, "S01");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].span.start_row, 3);
}

#[test]
fn test_use_state_lazy_initializer_from_props() {
    let code = r"
function Counter(props) {
  const [count] = useState(() => props.initialCount);
  return <span>{count}</span>;
}
";
    assert_eq!(findings(code, "S01").len(), 1);
}

#[test]
fn test_use_state_literal_clean() {
    let code = r"
function Counter() {
  const [count, setCount] = useState(0);
  return <span>{count}</span>;
}
";
    assert!(findings(code, "S01").is_empty());
}

#[test]
fn test_similar_name_not_flagged() {
    let code = r"
function Counter(myprops) {
  const [count] = useState(myprops.initial);
  return <span>{count}</span>;
}
";
    assert!(findings(code, "S01").is_empty());
}

#[test]
fn test_constructor_state_from_props() {
    let code = r"
class Profile extends React.Component {
  constructor(props) {
    super(props);
    this.state = { name: this.props.name };
  }
  render() {
    return <div>{this.state.name}</div>;
  }
}
";
    assert_eq!(findings(code, "S01").len(), 1);
}

#[test]
fn test_class_field_state_from_props() {
    let code = r"
class Profile extends React.Component {
  state = { name: this.props.name };
  render() {
    return <div>{this.state.name}</div>;
  }
}
";
    assert_eq!(findings(code, "S01").len(), 1);
}

#[test]
fn test_class_field_state_literal_clean() {
    let code = r"
class Profile extends React.Component {
  state = { open: false };
  render() {
    return <div/>;
  }
}
";
    assert!(findings(code, "S01").is_empty());
}

#[test]
fn test_force_update() {
    let code = r"
class Clock extends React.Component {
  tick() {
    this.forceUpdate();
  }
  render() {
    return <time>{Date.now()}</time>;
  }
}
";
    let out = findings(code, "S02");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].span.start_row, 4);
}

#[test]
fn test_force_update_outside_component_clean() {
    let code = r"
class Scheduler {
  tick() {
    this.forceUpdate();
  }
}
";
    assert!(findings(code, "S02").is_empty());
}

#[test]
fn test_use_state_outside_component_clean() {
    let code = r"
function usePoller(props) {
  const [delay] = useState(props.delay);
  return delay;
}
";
    assert!(findings(code, "S01").is_empty());
}

#[test]
fn test_ordinary_method_call_clean() {
    let code = r"
class Clock extends React.Component {
  tick() {
    this.refresh();
  }
  render() {
    return <time/>;
  }
}
";
    assert!(findings(code, "S02").is_empty());
}
