//! Test-plan data model and deserialization.

mod element;
mod parse;
mod tree;

pub use element::{ElementKind, TestElement};
pub use parse::{load_plan_tree, ParseError};
pub use tree::{PlanNode, PlanTree};
