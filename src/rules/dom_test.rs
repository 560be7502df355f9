// src/rules/dom_test.rs

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
fn test_get_element_by_id_in_component() {
    let code = r"
function Widget() {
  useEffect(() => {
    document.getElementById('root').focus();
  });
  return <div id='root' />;
}
";
    let out = findings(code, "D01");
    assert_eq!(out.len(), 1);
    assert!(out[0].message.contains("Widget"));
}

#[test]
fn test_query_selector_in_class_component() {
    let code = r"
class Menu extends React.Component {
  componentDidMount() {
    const el = document.querySelector('.menu');
    el.scrollIntoView();
  }
  render() {
    return <nav className='menu' />;
  }
}
";
    assert_eq!(findings(code, "D01").len(), 1);
}

#[test]
fn test_dom_call_outside_component_clean() {
    let code = r"
function focusRoot() {
  document.getElementById('root').focus();
}
";
    assert!(findings(code, "D01").is_empty());
}

#[test]
fn test_inner_html_write_in_component() {
    let code = r"
function Banner({ html }) {
  useEffect(() => {
    ref.current.innerHTML = html;
  });
  return <div ref={ref} />;
}
";
    assert_eq!(findings(code, "D01").len(), 1);
}

#[test]
fn test_find_dom_node_member_call() {
    let code = r"
class Box extends React.Component {
  componentDidMount() {
    const el = ReactDOM.findDOMNode(this);
    el.focus();
  }
  render() {
    return <div/>;
  }
}
";
    assert_eq!(findings(code, "D02").len(), 1);
}

#[test]
fn test_find_dom_node_direct_import() {
    let code = r"
function Tooltip({ anchor }) {
  useEffect(() => {
    findDOMNode(anchor).focus();
  });
  return <div role='tooltip' />;
}
";
    assert_eq!(findings(code, "D02").len(), 1);
}

#[test]
fn test_find_dom_node_outside_component_clean() {
    // findDOMNode in a plain utility function is not a component smell.
    let code = r"
function focusNode(instance) {
  findDOMNode(instance).focus();
}
";
    assert!(findings(code, "D02").is_empty());
}

#[test]
fn test_ref_usage_clean() {
    let code = r"
function Widget() {
  const ref = useRef(null);
  useEffect(() => {
    ref.current.focus();
  });
  return <div ref={ref} />;
}
";
    assert!(findings(code, "D01").is_empty());
    assert!(findings(code, "D02").is_empty());
}
