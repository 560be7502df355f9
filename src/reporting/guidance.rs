//! Static educational guidance per rule id.

/// Static educational guidance per rule.
pub(crate) struct RuleGuidance {
    pub(crate) why: &'static str,
    pub(crate) fix: &'static str,
}

/// Returns educational guidance for a rule id, if available.
pub(crate) fn get_guidance(rule: &str) -> Option<RuleGuidance> {
    Some(match rule {
        "S01" => RuleGuidance {
            why: "State seeded from props is a one-time copy; when the parent re-renders with new props, the copy is already stale.",
            fix: "Read from props directly, derive the value during render, or lift the state up so a single owner holds it.",
        },
        "S02" => RuleGuidance {
            why: "forceUpdate() re-renders without any state or prop change, which means the render is reading data React does not know about.",
            fix: "Move whatever the render reads into state or props so updates flow through setState/useState.",
        },
        "D01" => RuleGuidance {
            why: "React owns the DOM subtree it renders; imperative reads and writes desynchronize it from the virtual DOM and are overwritten on the next render.",
            fix: "Use a ref for imperative access to a single element, and state for anything that changes what is displayed.",
        },
        "D02" => RuleGuidance {
            why: "findDOMNode is deprecated, breaks with StrictMode, and couples the caller to the child's render output.",
            fix: "Attach a ref to the element you need (forwardRef for components) and read it from there.",
        },
        "J01" => RuleGuidance {
            why: "Duplicated JSX drifts: one copy gets the bug fix or the accessibility attribute, the others silently keep the old markup.",
            fix: "Extract the repeated fragment into a component and pass the varying parts as props.",
        },
        "J02" => RuleGuidance {
            why: "Array indices change when items are inserted, removed, or reordered, so React pairs old elements with the wrong data and keeps stale component state.",
            fix: "Key on a stable identifier from the data itself (id, slug, unique name).",
        },
        "C01" => RuleGuidance {
            why: "A component this large is doing several jobs, which makes it hard to test, reuse, or reason about in isolation.",
            fix: "Find the independent sections of the markup and extract each into its own component.",
        },
        "C02" => RuleGuidance {
            why: "A component created inside another component's body is a new type on every render, so React unmounts and remounts it each time, discarding its state and DOM.",
            fix: "Move the inner component to module scope and pass what it needs as props.",
        },
        "P01" => RuleGuidance {
            why: "An unused prop forces every call site to keep supplying data nobody reads, widening the contract for nothing.",
            fix: "Remove the prop from the destructuring and from every call site.",
        },
        _ => return None,
    })
}
