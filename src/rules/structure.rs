// src/rules/structure.rs
//! Component-shape smells: C01 (oversized component), C02 (component
//! defined inside another component).

use tree_sitter::Node;

use crate::types::{Finding, Severity, Span};

use super::components::{component_name, enclosing_component};
use super::RuleContext;

/// C01: Component body beyond the configured line limit. The catalogue's
/// extract-component refactoring in smell form.
pub fn check_oversized<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    let Some(name) = component_name(node, ctx) else {
        return;
    };
    let span = Span::from_node(&node);
    let lines = span.line_count();
    if lines <= ctx.rules.max_component_lines {
        return;
    }
    out.push(Finding::with_note(
        "C01",
        format!(
            "Component '{name}' spans {lines} lines (limit {})",
            ctx.rules.max_component_lines
        ),
        span,
        Severity::Info,
        "Markup this long usually contains independent sections. Extract them \
         into their own components."
            .to_string(),
    ));
}

/// C02: Component defined inside another component's body. The inner type
/// is recreated on every render of the outer one, so React unmounts and
/// remounts it, losing state and DOM.
pub fn check_nested<'t>(node: Node<'t>, ctx: &RuleContext<'t>, out: &mut Vec<Finding>) {
    let Some(inner) = component_name(node, ctx) else {
        return;
    };
    let Some(outer) = enclosing_component(node, ctx) else {
        return;
    };
    out.push(Finding::with_note(
        "C02",
        format!("Component '{inner}' is defined inside component '{outer}'"),
        Span::from_node(&node),
        Severity::Error,
        format!(
            "Every render of '{outer}' creates a new '{inner}' type, resetting \
             its state. Move '{inner}' to module scope and pass what it needs \
             as props."
        ),
    ));
}

#[cfg(test)]
#[path = "structure_test.rs"]
mod tests;
