//! Replaceable-controller protocol adapter.
//!
//! The host framework drives three phases on any node it substitutes at tree
//! build time: it clones the placeholder, invokes resolution on the clone,
//! then retrieves the replacement subtree (and its single root element, when
//! there is one) to splice into the live tree.

use crate::plan::{PlanTree, TestElement};

use super::resolver::FragmentResolver;

/// Context handed to the resolve phase by the host's tree traversal.
/// This adapter ignores it entirely; it exists to satisfy the protocol shape.
#[derive(Debug, Clone, Default)]
pub struct TraversalContext {
    /// Element names from the tree root down to the node being resolved.
    pub path: Vec<String>,
}

/// Three-phase contract for nodes that are replaced by a computed subtree
/// before execution. Phase one is the type's own clone step (for
/// [`IncludeController`], [`IncludeController::clone_for_run`]); the two
/// retrieval accessors are pure reads and must never trigger resolution.
pub trait ReplaceableController {
    /// Resolve phase: compute and store the replacement subtree.
    fn resolve_replacement_subtree(&mut self, context: Option<&TraversalContext>);

    /// Retrieve phase: the subtree to splice in place of the placeholder.
    /// `None` only before the first clone/resolve of this instance.
    fn replacement_subtree(&self) -> Option<&PlanTree>;

    /// Retrieve phase: the single root element, when the resolved subtree has
    /// exactly one top-level node.
    fn replacement_element(&self) -> Option<&TestElement>;
}

/// Placeholder controller whose steps come from a plan artifact in an
/// object-storage bucket.
///
/// The artifact reference (container, key) is the configuration surface; the
/// resolver handle bundles the collaborators (store, diagnostics, staging
/// prefix) and is shared between instances. Resolved state is plain owned
/// data and belongs exclusively to one instance.
pub struct IncludeController {
    name: String,
    container: String,
    object_key: String,
    resolver: FragmentResolver,
    subtree: Option<PlanTree>,
    replacement: Option<TestElement>,
}

impl IncludeController {
    pub fn new(resolver: FragmentResolver) -> Self {
        Self {
            name: String::new(),
            container: String::new(),
            object_key: String::new(),
            resolver,
            subtree: None,
            replacement: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn set_container(&mut self, container: impl Into<String>) {
        self.container = container.into();
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    pub fn set_object_key(&mut self, key: impl Into<String>) {
        self.object_key = key.into();
    }

    /// True once this instance holds resolved state (a clone holds at least
    /// the placeholder tree from the moment it is created).
    pub fn is_resolved(&self) -> bool {
        self.subtree.is_some()
    }

    /// Clone phase of the replaceable-controller protocol.
    ///
    /// Copies the artifact reference verbatim and deep-copies any resolved
    /// state onto the new instance, so the two never alias. An unresolved
    /// original hands the clone an empty placeholder tree: host-side
    /// bookkeeping that runs between clone and resolve sees valid resolved
    /// state, and the download itself is deferred to the resolve phase.
    pub fn clone_for_run(&self) -> Self {
        Self {
            name: self.name.clone(),
            container: self.container.clone(),
            object_key: self.object_key.clone(),
            resolver: self.resolver.clone(),
            subtree: Some(self.subtree.clone().unwrap_or_default()),
            replacement: self.replacement.clone(),
        }
    }
}

impl ReplaceableController for IncludeController {
    /// Runs the resolver fresh and unconditionally overwrites whatever was
    /// copied at clone time. Calling it again re-downloads; state never moves
    /// back to unresolved.
    fn resolve_replacement_subtree(&mut self, _context: Option<&TraversalContext>) {
        let tree = self
            .resolver
            .resolve(&self.name, &self.container, &self.object_key);
        self.replacement = tree.single_node().map(|node| node.element.clone());
        self.subtree = Some(tree);
    }

    fn replacement_subtree(&self) -> Option<&PlanTree> {
        self.subtree.as_ref()
    }

    fn replacement_element(&self) -> Option<&TestElement> {
        self.replacement.as_ref()
    }
}
