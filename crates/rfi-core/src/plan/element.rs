//! Test-element payloads: named, enabled-flagged, kind-tagged.

use std::collections::BTreeMap;

/// Variant tag for a test element. Only the two structural markers get
/// dedicated variants; every other element type is `Generic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Top-level container of a whole test plan.
    TestPlan,
    /// Container whose children form the reusable fragment.
    TestFragment,
    /// Any other element (sampler, controller, timer, ...).
    Generic {
        element_type: String,
        properties: BTreeMap<String, String>,
    },
}

/// One test-plan node payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestElement {
    name: String,
    enabled: bool,
    kind: ElementKind,
}

impl TestElement {
    pub fn new(name: impl Into<String>, enabled: bool, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            enabled,
            kind,
        }
    }

    /// Enabled plan root with the given name.
    pub fn plan_root(name: impl Into<String>) -> Self {
        Self::new(name, true, ElementKind::TestPlan)
    }

    /// Enabled fragment marker with the given name.
    pub fn fragment_marker(name: impl Into<String>) -> Self {
        Self::new(name, true, ElementKind::TestFragment)
    }

    /// Generic element with no properties.
    pub fn generic(name: impl Into<String>, element_type: impl Into<String>, enabled: bool) -> Self {
        Self::new(
            name,
            enabled,
            ElementKind::Generic {
                element_type: element_type.into(),
                properties: BTreeMap::new(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn is_plan_root(&self) -> bool {
        matches!(self.kind, ElementKind::TestPlan)
    }

    pub fn is_fragment_marker(&self) -> bool {
        matches!(self.kind, ElementKind::TestFragment)
    }
}
