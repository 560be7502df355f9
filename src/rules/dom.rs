// src/rules/dom.rs
//! Direct DOM access smells: D01 (document.* calls, innerHTML writes),
//! D02 (findDOMNode).

use tree_sitter::Node;

use crate::types::{Finding, Severity, Span};

use super::components::enclosing_component;
use super::RuleContext;

/// Callee texts that reach around React into the live DOM.
const DOM_CALLS: &[&str] = &[
    "document.getElementById",
    "document.querySelector",
    "document.querySelectorAll",
    "document.getElementsByClassName",
    "document.getElementsByTagName",
    "document.createElement",
];

/// D01: Direct DOM manipulation inside a component.
///
/// Only fires inside a recognized component; `document.*` in plain
/// utility modules is not React's business.
pub fn check_direct_dom<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    match node.kind() {
        "call_expression" => check_document_call(node, ctx, out),
        "assignment_expression" => check_inner_html(node, ctx, out),
        _ => {}
    }
}

fn check_document_call<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    let Some(callee) = node.child_by_field_name("function") else {
        return;
    };
    let callee_text = ctx.text(callee);
    if !DOM_CALLS.contains(&callee_text) {
        return;
    }
    let Some(component) = enclosing_component(node, ctx) else {
        return;
    };
    out.push(Finding::with_note(
        "D01",
        format!("Direct DOM access `{callee_text}` inside component '{component}'"),
        Span::from_node(&node),
        Severity::Warning,
        "React owns this subtree. Use a ref for the element, or state for \
         what the DOM should show."
            .to_string(),
    ));
}

fn check_inner_html<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    let Some(left) = node.child_by_field_name("left") else {
        return;
    };
    if left.kind() != "member_expression" {
        return;
    }
    let Some(property) = left.child_by_field_name("property") else {
        return;
    };
    if ctx.text(property) != "innerHTML" {
        return;
    }
    let Some(component) = enclosing_component(node, ctx) else {
        return;
    };
    out.push(Finding::with_note(
        "D01",
        format!("innerHTML written directly inside component '{component}'"),
        Span::from_node(&node),
        Severity::Warning,
        "The next render will silently overwrite this. Render the content \
         as JSX instead."
            .to_string(),
    ));
}

/// D02: `findDOMNode` usage (deprecated API, works on both the
/// `ReactDOM.findDOMNode(...)` and the directly-imported form). Like D01,
/// only fires inside a recognized component.
pub fn check_find_dom_node<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    let Some(callee) = node.child_by_field_name("function") else {
        return;
    };
    let is_find = match callee.kind() {
        "identifier" => ctx.text(callee) == "findDOMNode",
        "member_expression" => callee
            .child_by_field_name("property")
            .is_some_and(|p| ctx.text(p) == "findDOMNode"),
        _ => false,
    };
    if is_find && enclosing_component(node, ctx).is_some() {
        out.push(Finding::with_note(
            "D02",
            "findDOMNode() is deprecated".to_string(),
            Span::from_node(&node),
            Severity::Warning,
            "Attach a ref to the element you need and read it from there.".to_string(),
        ));
    }
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod tests;
