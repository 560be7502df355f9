// src/rules/mod.rs
//! The pattern registry: one detector per catalogued React smell.

pub mod components;
pub mod dom;
pub mod jsx;
pub mod props;
pub mod state;
pub mod structure;

use std::cell::RefCell;
use std::collections::HashMap;

use tree_sitter::Node;

use crate::config::RuleConfig;
use crate::types::{Finding, Severity, Span};

/// Per-file context handed to every rule. The `jsx_seen` scratch map is
/// owned by the engine and rebuilt for each file, so rules themselves
/// stay stateless across files.
pub struct RuleContext<'a> {
    pub root: Node<'a>,
    pub source: &'a str,
    pub filename: &'a str,
    pub rules: &'a RuleConfig,
    pub jsx_seen: RefCell<HashMap<String, Span>>,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn new(root: Node<'a>, source: &'a str, filename: &'a str, rules: &'a RuleConfig) -> Self {
        Self {
            root,
            source,
            filename,
            rules,
            jsx_seen: RefCell::new(HashMap::new()),
        }
    }

    /// Source text of a node. Empty on (impossible) non-UTF8 ranges.
    #[must_use]
    pub fn text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// A registered detector rule. Stateless; registered once at startup.
pub struct RuleDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    /// Node kinds this rule wants dispatched to it.
    pub kinds: &'static [&'static str],
    pub check: for<'t> fn(Node<'t>, &RuleContext<'t>, &mut Vec<Finding>),
}

/// Ordered rule registry. Order is the dispatch order for each node.
static REGISTRY: &[RuleDef] = &[
    RuleDef {
        id: "S01",
        name: "props-into-state",
        description: "Props copied into initial state stop reflecting parent updates",
        severity: Severity::Warning,
        kinds: &[
            "call_expression",
            "assignment_expression",
            "public_field_definition",
        ],
        check: state::check_props_into_state,
    },
    RuleDef {
        id: "S02",
        name: "force-update",
        description: "forceUpdate() bypasses React's data flow",
        severity: Severity::Error,
        kinds: &["call_expression"],
        check: state::check_force_update,
    },
    RuleDef {
        id: "D01",
        name: "direct-dom",
        description: "Direct DOM manipulation inside a component fights the renderer",
        severity: Severity::Warning,
        kinds: &["call_expression", "assignment_expression"],
        check: dom::check_direct_dom,
    },
    RuleDef {
        id: "D02",
        name: "find-dom-node",
        description: "findDOMNode is deprecated; use a ref instead",
        severity: Severity::Warning,
        kinds: &["call_expression"],
        check: dom::check_find_dom_node,
    },
    RuleDef {
        id: "J01",
        name: "duplicate-jsx",
        description: "Duplicated JSX fragments belong in a shared component",
        severity: Severity::Warning,
        kinds: &["jsx_element", "jsx_self_closing_element"],
        check: jsx::check_duplicate_jsx,
    },
    RuleDef {
        id: "J02",
        name: "index-as-key",
        description: "Array index as the key prop breaks reconciliation on reorder",
        severity: Severity::Warning,
        kinds: &["jsx_attribute"],
        check: jsx::check_index_as_key,
    },
    RuleDef {
        id: "C01",
        name: "oversized-component",
        description: "Oversized component body; extract-component candidate",
        severity: Severity::Info,
        kinds: &["function_declaration", "class_declaration", "variable_declarator"],
        check: structure::check_oversized,
    },
    RuleDef {
        id: "C02",
        name: "nested-component",
        description: "Component defined inside another component has unstable identity",
        severity: Severity::Error,
        kinds: &["function_declaration", "class_declaration", "variable_declarator"],
        check: structure::check_nested,
    },
    RuleDef {
        id: "P01",
        name: "unused-prop",
        description: "Destructured prop never used in the component body",
        severity: Severity::Warning,
        kinds: &["function_declaration", "variable_declarator"],
        check: props::check_unused_props,
    },
];

#[must_use]
pub fn registry() -> &'static [RuleDef] {
    REGISTRY
}

#[must_use]
pub fn is_known_rule(id: &str) -> bool {
    REGISTRY.iter().any(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_unique() {
        let mut ids: Vec<&str> = registry().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry().len());
    }

    #[test]
    fn test_is_known_rule() {
        assert!(is_known_rule("S01"));
        assert!(!is_known_rule("ZZ99"));
    }
}
