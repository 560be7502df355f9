// src/rules/components.rs
//! Shared helpers for recognizing React components in the syntax tree.
//!
//! A definition counts as a component when its name is capitalized and it
//! either produces JSX or extends `React.Component`. Rules that only make
//! sense inside a component lean on these instead of firing file-wide.

use tree_sitter::Node;

use crate::analysis::preorder;

use super::RuleContext;

/// React convention: component names start with an uppercase letter.
#[must_use]
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Returns true if the subtree contains any JSX construct.
#[must_use]
pub fn contains_jsx(node: Node) -> bool {
    let mut found = false;
    preorder(node, &mut |n| {
        if matches!(
            n.kind(),
            "jsx_element" | "jsx_self_closing_element" | "jsx_fragment"
        ) {
            found = true;
        }
    });
    found
}

/// If `node` is a component definition, returns its name.
///
/// Recognized shapes:
/// - `function Foo() { ... <jsx/> ... }`
/// - `const Foo = () => <jsx/>` (and function expressions)
/// - `class Foo extends React.Component`
#[must_use]
pub fn component_name<'a>(node: Node<'a>, ctx: &RuleContext<'a>) -> Option<&'a str> {
    match node.kind() {
        "function_declaration" => {
            let name = ctx.text(node.child_by_field_name("name")?);
            (is_component_name(name) && contains_jsx(node)).then_some(name)
        }
        "class_declaration" => {
            let name = ctx.text(node.child_by_field_name("name")?);
            if !is_component_name(name) {
                return None;
            }
            (extends_component(node, ctx) || contains_jsx(node)).then_some(name)
        }
        "variable_declarator" => {
            let name_node = node.child_by_field_name("name")?;
            if name_node.kind() != "identifier" {
                return None;
            }
            let name = ctx.text(name_node);
            if !is_component_name(name) {
                return None;
            }
            let value = node.child_by_field_name("value")?;
            let is_fn = matches!(value.kind(), "arrow_function" | "function_expression");
            (is_fn && contains_jsx(value)).then_some(name)
        }
        _ => None,
    }
}

/// Name of the nearest component definition strictly above `node`, if any.
#[must_use]
pub fn enclosing_component<'a>(node: Node<'a>, ctx: &RuleContext<'a>) -> Option<&'a str> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if let Some(name) = component_name(ancestor, ctx) {
            return Some(name);
        }
        current = ancestor.parent();
    }
    None
}

fn extends_component(class_node: Node, ctx: &RuleContext) -> bool {
    let mut cursor = class_node.walk();
    for child in class_node.children(&mut cursor) {
        if child.kind() == "class_heritage" {
            let heritage = ctx.text(child);
            return heritage.contains("Component") || heritage.contains("PureComponent");
        }
    }
    false
}

#[cfg(test)]
#[path = "components_test.rs"]
mod tests;
