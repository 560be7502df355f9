// src/rules/props.rs
//! P01: destructured prop never referenced in the component body
//! (remove-unused-props candidate).

use std::collections::HashSet;

use tree_sitter::Node;

use crate::analysis::preorder;
use crate::types::{Finding, Severity, Span};

use super::components::component_name;
use super::RuleContext;

/// One binding introduced by the props object pattern: the prop key as
/// written at call sites, the local name it binds to, and where.
struct PropBinding<'a> {
    prop: &'a str,
    local: &'a str,
    span: Span,
}

/// P01: Unused destructured prop.
///
/// Bails out conservatively when the pattern has a rest element
/// (`{...rest}`) or the body touches `arguments`, since either can consume
/// any prop without naming it.
pub fn check_unused_props<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    if component_name(node, ctx).is_none() {
        return;
    }
    let Some(func) = function_node(node) else {
        return;
    };
    let Some(pattern) = props_object_pattern(func) else {
        return;
    };
    let Some(bindings) = collect_bindings(pattern, ctx) else {
        return; // rest element present
    };
    let Some(body) = func.child_by_field_name("body") else {
        return;
    };

    let used = collect_used_names(body, ctx);
    if used.contains("arguments") {
        return;
    }

    for binding in bindings {
        if !used.contains(binding.local) {
            out.push(Finding::with_note(
                "P01",
                format!("Prop '{}' is destructured but never used", binding.prop),
                binding.span,
                Severity::Warning,
                "An unused prop widens the component's contract for nothing. \
                 Remove it here and at the call sites."
                    .to_string(),
            ));
        }
    }
}

fn function_node(node: Node) -> Option<Node> {
    match node.kind() {
        "function_declaration" => Some(node),
        "variable_declarator" => node
            .child_by_field_name("value")
            .filter(|v| matches!(v.kind(), "arrow_function" | "function_expression")),
        _ => None,
    }
}

/// The object pattern of the first parameter, if the component takes its
/// props destructured.
fn props_object_pattern(func: Node) -> Option<Node> {
    let params = func.child_by_field_name("parameters")?;
    let first = params.named_child(0)?;
    let pattern = match first.kind() {
        "required_parameter" | "optional_parameter" => {
            first.child_by_field_name("pattern")?
        }
        _ => first,
    };
    (pattern.kind() == "object_pattern").then_some(pattern)
}

/// Walks the object pattern and returns its bindings, or `None` when a
/// rest element makes usage tracking unsound.
fn collect_bindings<'a>(pattern: Node<'a>, ctx: &RuleContext<'a>) -> Option<Vec<PropBinding<'a>>> {
    let mut bindings = Vec::new();
    let mut cursor = pattern.walk();

    for child in pattern.named_children(&mut cursor) {
        match child.kind() {
            "shorthand_property_identifier_pattern" => {
                let name = ctx.text(child);
                bindings.push(PropBinding {
                    prop: name,
                    local: name,
                    span: Span::from_node(&child),
                });
            }
            // `{ value: local }` — usage is tracked on the alias.
            "pair_pattern" => {
                let key = child.child_by_field_name("key")?;
                let value = child.child_by_field_name("value")?;
                if value.kind() == "identifier" {
                    bindings.push(PropBinding {
                        prop: ctx.text(key),
                        local: ctx.text(value),
                        span: Span::from_node(&child),
                    });
                }
                // Nested destructuring always "uses" the prop; skip it.
            }
            // `{ count = 0 }` — default value, binding on the left.
            "object_assignment_pattern" => {
                if let Some(left) = child.child_by_field_name("left") {
                    if left.kind() == "shorthand_property_identifier_pattern" {
                        let name = ctx.text(left);
                        bindings.push(PropBinding {
                            prop: name,
                            local: name,
                            span: Span::from_node(&child),
                        });
                    }
                }
            }
            "rest_pattern" => return None,
            _ => {}
        }
    }

    Some(bindings)
}

fn collect_used_names<'a>(body: Node<'a>, ctx: &RuleContext<'a>) -> HashSet<&'a str> {
    let mut used = HashSet::new();
    preorder(body, &mut |n| {
        if matches!(n.kind(), "identifier" | "shorthand_property_identifier") {
            used.insert(ctx.text(n));
        }
    });
    used
}

#[cfg(test)]
#[path = "props_test.rs"]
mod tests;
