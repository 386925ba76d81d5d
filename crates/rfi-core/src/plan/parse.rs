//! Plan-file deserialization: JSON wire structs mapped into the domain tree.
//!
//! A plan file is `{ "plan": [node, ...] }` where each node carries `kind`,
//! `name`, an `enabled` flag (default true), free-form string `properties`,
//! and ordered `children`. The kinds `test_plan` and `test_fragment` map to
//! the structural marker variants; anything else is a generic element.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::element::{ElementKind, TestElement};
use super::tree::{PlanNode, PlanTree};

/// Error reading or parsing a staged plan artifact.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read plan file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse plan file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct PlanFile {
    plan: Vec<WireNode>,
}

#[derive(Debug, Deserialize)]
struct WireNode {
    kind: String,
    name: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    properties: BTreeMap<String, String>,
    #[serde(default)]
    children: Vec<WireNode>,
}

fn default_enabled() -> bool {
    true
}

/// Deserializes the plan file at `path` into a labeled tree.
pub fn load_plan_tree(path: &Path) -> Result<PlanTree, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: PlanFile = serde_json::from_slice(&bytes).map_err(|source| ParseError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(to_tree(file.plan))
}

fn to_tree(nodes: Vec<WireNode>) -> PlanTree {
    PlanTree::from_nodes(nodes.into_iter().map(to_node).collect())
}

fn to_node(node: WireNode) -> PlanNode {
    let WireNode {
        kind,
        name,
        enabled,
        properties,
        children,
    } = node;
    let kind = if kind == "test_plan" {
        ElementKind::TestPlan
    } else if kind == "test_fragment" {
        ElementKind::TestFragment
    } else {
        ElementKind::Generic {
            element_type: kind,
            properties,
        }
    };
    PlanNode::new(TestElement::new(name, enabled, kind), to_tree(children))
}
