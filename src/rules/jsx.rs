// src/rules/jsx.rs
//! JSX-shape smells: J01 (duplicated JSX fragments), J02 (index as key).

use sha2::{Digest, Sha256};
use tree_sitter::Node;

use crate::types::{Finding, Severity, Span};

use super::components::enclosing_component;
use super::RuleContext;

/// J01: Duplicated JSX fragment within a file.
///
/// Only the outermost element of each JSX expression is fingerprinted, so
/// a duplicated parent does not also report every duplicated child. The
/// later occurrence is reported, pointing back at the first.
pub fn check_duplicate_jsx(node: Node, ctx: &RuleContext, out: &mut Vec<Finding>) {
    if is_nested_jsx(node) {
        return;
    }

    let span = Span::from_node(&node);
    if span.line_count() < ctx.rules.min_duplicate_lines {
        return;
    }

    let print = fingerprint(ctx.text(node));
    let mut seen = ctx.jsx_seen.borrow_mut();
    if let Some(first) = seen.get(&print) {
        out.push(Finding::with_note(
            "J01",
            format!(
                "Duplicated JSX fragment ({} lines), first seen at line {}",
                span.line_count(),
                first.start_row
            ),
            span,
            Severity::Warning,
            "Extract the repeated markup into a shared component.".to_string(),
        ));
    } else {
        seen.insert(print, span);
    }
}

fn is_nested_jsx(node: Node) -> bool {
    node.parent().is_some_and(|p| {
        matches!(
            p.kind(),
            "jsx_element" | "jsx_self_closing_element" | "jsx_fragment"
        )
    })
}

/// Whitespace-insensitive fingerprint of a JSX fragment.
fn fingerprint(text: &str) -> String {
    let normalized = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// J02: Array index used as the `key` prop of a `.map` callback inside a
/// recognized component.
pub fn check_index_as_key<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    let Some(key_name) = key_attribute_identifier(node, ctx) else {
        return;
    };
    if enclosing_component(node, ctx).is_none() {
        return;
    }
    let Some(callback) = enclosing_function(node) else {
        return;
    };
    if !is_map_callback(callback, ctx) {
        return;
    }

    let params = parameter_names(callback, ctx);
    if params.get(1).copied() == Some(key_name) {
        out.push(Finding::with_note(
            "J02",
            format!("Array index '{key_name}' used as key prop"),
            Span::from_node(&node),
            Severity::Warning,
            "Indices shift when items are inserted, removed, or reordered, so \
             React matches the wrong elements. Key on a stable id from the data."
                .to_string(),
        ));
    }
}

/// For `key={ident}`, returns `ident`.
fn key_attribute_identifier<'a>(node: Node<'a>, ctx: &RuleContext<'a>) -> Option<&'a str> {
    let name = node.named_child(0)?;
    if ctx.text(name) != "key" {
        return None;
    }

    let mut cursor = node.walk();
    let value = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "jsx_expression")?;
    let expr = value.named_child(0)?;
    (expr.kind() == "identifier").then(|| ctx.text(expr))
}

fn enclosing_function(node: Node) -> Option<Node> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if matches!(ancestor.kind(), "arrow_function" | "function_expression") {
            return Some(ancestor);
        }
        current = ancestor.parent();
    }
    None
}

/// Returns true if `func` is the callback argument of a `.map(...)` call.
fn is_map_callback(func: Node, ctx: &RuleContext) -> bool {
    let Some(args) = func.parent() else {
        return false;
    };
    if args.kind() != "arguments" {
        return false;
    }
    let Some(call) = args.parent() else {
        return false;
    };
    if call.kind() != "call_expression" {
        return false;
    }
    call.child_by_field_name("function")
        .filter(|callee| callee.kind() == "member_expression")
        .and_then(|callee| callee.child_by_field_name("property"))
        .is_some_and(|p| ctx.text(p) == "map")
}

/// Positional parameter names of an arrow/function expression. Handles
/// both the parenthesized form and the bare single-identifier arrow.
fn parameter_names<'a>(func: Node<'a>, ctx: &RuleContext<'a>) -> Vec<&'a str> {
    if let Some(single) = func.child_by_field_name("parameter") {
        return vec![ctx.text(single)];
    }

    let Some(params) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        let pattern = match child.kind() {
            "required_parameter" | "optional_parameter" => {
                child.child_by_field_name("pattern").unwrap_or(child)
            }
            _ => child,
        };
        if pattern.kind() == "identifier" {
            names.push(ctx.text(pattern));
        } else {
            // Destructured parameter: keep the position, name is unusable.
            names.push("");
        }
    }
    names
}

#[cfg(test)]
#[path = "jsx_test.rs"]
mod tests;
