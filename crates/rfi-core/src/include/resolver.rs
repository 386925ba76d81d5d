//! Resolution pipeline: guard, fetch to staging, parse, extract, filter.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::diag::DiagnosticSink;
use crate::plan::{self, ParseError, PlanTree};
use crate::store::{ObjectStore, TransferError};

use super::branch::{extract_fragment, remove_disabled_items};

/// Failure class for one failed include attempt. Every class downgrades to a
/// warning plus an empty tree; none abort the surrounding test-plan load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The transfer backend cannot operate at all.
    MissingDependency,
    /// The object (or the staged artifact) is absent.
    NotFound,
    /// Anything else: HTTP error, transport failure, malformed plan.
    Unexpected,
}

#[derive(Debug, Error)]
enum IncludeError {
    #[error(transparent)]
    Transfer(#[from] TransferError),
    #[error("staged artifact missing or unreadable at {path}")]
    Staging { path: PathBuf },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn classify(err: &IncludeError) -> FailureClass {
    match err {
        IncludeError::Transfer(TransferError::BackendUnavailable(_)) => {
            FailureClass::MissingDependency
        }
        IncludeError::Transfer(TransferError::NotFound { .. }) => FailureClass::NotFound,
        _ => FailureClass::Unexpected,
    }
}

/// Turns a remote artifact reference into a filtered fragment subtree.
///
/// Holds the collaborators resolution needs (store, diagnostics sink, staging
/// prefix); the resolved trees themselves are owned by whoever calls
/// [`FragmentResolver::resolve`], never by the resolver.
#[derive(Clone)]
pub struct FragmentResolver {
    store: Arc<dyn ObjectStore>,
    sink: Arc<dyn DiagnosticSink>,
    staging_prefix: String,
}

impl FragmentResolver {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        sink: Arc<dyn DiagnosticSink>,
        staging_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            sink,
            staging_prefix: staging_prefix.into(),
        }
    }

    /// Local staging path for one artifact reference:
    /// prefix + container + separator + key, trimmed.
    pub fn staging_path(&self, container: &str, key: &str) -> PathBuf {
        let composed = format!(
            "{}{}{}{}",
            self.staging_prefix,
            container,
            std::path::MAIN_SEPARATOR,
            key
        );
        PathBuf::from(composed.trim())
    }

    /// Resolves one artifact reference into a filtered fragment subtree.
    ///
    /// An unconfigured reference (either side blank after trimming) yields an
    /// empty tree without touching the store. Failures are downgraded: a
    /// warning is logged, the diagnostic sink is notified, and an empty tree
    /// comes back. `owner` names the controller in those messages.
    pub fn resolve(&self, owner: &str, container: &str, key: &str) -> PlanTree {
        if container.trim().is_empty() || key.trim().is_empty() {
            tracing::debug!(
                "include controller '{}' has no artifact reference, skipping resolution",
                owner
            );
            return PlanTree::new();
        }

        match self.load_included_elements(container, key) {
            Ok(tree) => tree,
            Err(err) => {
                let location = self.staging_path(container, key);
                let msg = match classify(&err) {
                    FailureClass::MissingDependency => format!(
                        "Including \"{}\" failed for include controller \"{}\", transfer backend unavailable",
                        location.display(),
                        owner
                    ),
                    FailureClass::NotFound => format!(
                        "\"{}\" not found for include controller \"{}\"",
                        location.display(),
                        owner
                    ),
                    FailureClass::Unexpected => format!(
                        "Including \"{}\" failed for include controller \"{}\", unexpected error",
                        location.display(),
                        owner
                    ),
                };
                tracing::warn!("{}: {}", msg, err);
                self.sink.report_error(&format!("{} - see log for details", msg));
                PlanTree::new()
            }
        }
    }

    fn load_included_elements(&self, container: &str, key: &str) -> Result<PlanTree, IncludeError> {
        let staged = self.staging_path(container, key);
        self.store.fetch(container, key, &staged)?;
        if !staged.is_file() {
            return Err(IncludeError::Staging { path: staged });
        }
        tracing::info!("loading included fragment from {}", staged.display());
        let tree = plan::load_plan_tree(&staged)?;
        let mut fragment = extract_fragment(tree);
        remove_disabled_items(&mut fragment);
        Ok(fragment)
    }
}
