// src/rules/state.rs
//! State-flow smells: S01 (props copied into state), S02 (forceUpdate).

use tree_sitter::Node;

use crate::types::{Finding, Severity, Span};

use super::components::enclosing_component;
use super::RuleContext;

/// S01: Props copied into initial state.
///
/// Covers the three shapes the catalogue shows: `this.state = { x:
/// this.props.x }` in a constructor, the `state = { ... }` class field,
/// and `useState(props.x)` (including the lazy `useState(() => props.x)`
/// form). State seeded from props stops reflecting parent updates.
/// Only fires inside a recognized component.
pub fn check_props_into_state<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    if enclosing_component(node, ctx).is_none() {
        return;
    }
    match node.kind() {
        "call_expression" => check_use_state(node, ctx, out),
        "assignment_expression" => check_state_assignment(node, ctx, out),
        "public_field_definition" => check_state_field(node, ctx, out),
        _ => {}
    }
}

fn check_use_state(node: Node, ctx: &RuleContext, out: &mut Vec<Finding>) {
    let Some(callee) = node.child_by_field_name("function") else {
        return;
    };
    let callee_text = ctx.text(callee);
    if callee_text != "useState" && !callee_text.ends_with(".useState") {
        return;
    }
    let Some(args) = node.child_by_field_name("arguments") else {
        return;
    };
    if references_props(ctx.text(args)) {
        out.push(Finding::with_note(
            "S01",
            "Initial state copied from props via useState".to_string(),
            Span::from_node(&node),
            Severity::Warning,
            "The state will not follow later prop changes. Use the prop directly, \
             or derive the value during render."
                .to_string(),
        ));
    }
}

fn check_state_assignment(node: Node, ctx: &RuleContext, out: &mut Vec<Finding>) {
    let Some(left) = node.child_by_field_name("left") else {
        return;
    };
    if ctx.text(left) != "this.state" {
        return;
    }
    let Some(right) = node.child_by_field_name("right") else {
        return;
    };
    if references_props(ctx.text(right)) {
        out.push(props_into_state_finding(node));
    }
}

fn check_state_field(node: Node, ctx: &RuleContext, out: &mut Vec<Finding>) {
    let Some(name) = node.child_by_field_name("name") else {
        return;
    };
    if ctx.text(name) != "state" {
        return;
    }
    let Some(value) = node.child_by_field_name("value") else {
        return;
    };
    if references_props(ctx.text(value)) {
        out.push(props_into_state_finding(node));
    }
}

fn props_into_state_finding(node: Node) -> Finding {
    Finding::with_note(
        "S01",
        "Initial state copied from props".to_string(),
        Span::from_node(&node),
        Severity::Warning,
        "The copy goes stale when the parent re-renders with new props. \
         Read from props directly."
            .to_string(),
    )
}

/// S02: `this.forceUpdate()` usage. A `forceUpdate` method on some
/// unrelated class is not React's business, so the rule only fires inside
/// a recognized component.
pub fn check_force_update<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    let Some(callee) = node.child_by_field_name("function") else {
        return;
    };
    if callee.kind() != "member_expression" {
        return;
    }
    let Some(property) = callee.child_by_field_name("property") else {
        return;
    };
    if ctx.text(property) == "forceUpdate" && enclosing_component(node, ctx).is_some() {
        out.push(Finding::with_note(
            "S02",
            "forceUpdate() call bypasses React's data flow".to_string(),
            Span::from_node(&node),
            Severity::Error,
            "Whatever the render reads should live in state or props so React \
             re-renders on its own."
                .to_string(),
        ));
    }
}

/// Returns true if `text` contains a `props.` member access (either bare
/// `props.x` or `this.props.x`), with an identifier boundary on the left
/// so names like `otherprops` do not match.
fn references_props(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut idx = 0;
    while let Some(pos) = text[idx..].find("props") {
        let start = idx + pos;
        let end = start + "props".len();
        let boundary_before = start == 0
            || !matches!(bytes[start - 1], b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$');
        if boundary_before && bytes.get(end) == Some(&b'.') {
            return true;
        }
        idx = end;
    }
    false
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
