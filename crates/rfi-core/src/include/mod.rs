//! Remote fragment include: resolution pipeline and the replaceable-controller
//! protocol that substitutes the resolved subtree into a running test tree.

mod branch;
mod controller;
mod resolver;

pub use branch::{contains_fragment, extract_fragment, remove_disabled_items};
pub use controller::{IncludeController, ReplaceableController, TraversalContext};
pub use resolver::{FailureClass, FragmentResolver};
