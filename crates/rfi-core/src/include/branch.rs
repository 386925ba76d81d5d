//! Fragment extraction and disabled-node filtering on a parsed plan tree.

use crate::plan::PlanTree;

/// Extracts the test-fragment subtree from a freshly parsed plan.
///
/// Scans top-level nodes in order. A plan root means the fragment lives one
/// level down, so the scan descends into it and repeats there; a fragment
/// marker ends the scan and yields its children verbatim. The first match in
/// iteration order wins; later siblings are ignored. A plan with neither
/// yields an empty tree: not an error, just nothing to include.
pub fn extract_fragment(tree: PlanTree) -> PlanTree {
    for node in tree {
        if node.element.is_plan_root() {
            return extract_fragment(node.children);
        }
        if node.element.is_fragment_marker() {
            return node.children;
        }
    }
    tracing::warn!("no test fragment found in included plan, substituting an empty tree");
    PlanTree::new()
}

/// True if `extract_fragment` would find a fragment in this tree.
pub fn contains_fragment(tree: &PlanTree) -> bool {
    for node in tree.nodes() {
        if node.element.is_plan_root() {
            return contains_fragment(&node.children);
        }
        if node.element.is_fragment_marker() {
            return true;
        }
    }
    false
}

/// Removes disabled nodes in place, level by level. A removed node takes its
/// entire subtree with it; children of a disabled node are never re-parented
/// or inspected. Surviving nodes are recursed into regardless of depth.
pub fn remove_disabled_items(tree: &mut PlanTree) {
    tree.retain(|node| node.element.is_enabled());
    for node in tree.nodes_mut() {
        remove_disabled_items(&mut node.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{PlanNode, TestElement};

    fn sampler(name: &str, enabled: bool) -> PlanNode {
        PlanNode::leaf(TestElement::generic(name, "http_request", enabled))
    }

    fn names(tree: &PlanTree) -> Vec<&str> {
        tree.nodes().iter().map(|n| n.element.name()).collect()
    }

    #[test]
    fn fragment_inside_plan_root_is_extracted() {
        // [PlanRoot -> [GenericA, Fragment -> [X, Y], GenericB]]
        let tree = PlanTree::from_nodes(vec![PlanNode::new(
            TestElement::plan_root("suite"),
            PlanTree::from_nodes(vec![
                sampler("generic-a", true),
                PlanNode::new(
                    TestElement::fragment_marker("frag"),
                    PlanTree::from_nodes(vec![sampler("x", true), sampler("y", true)]),
                ),
                sampler("generic-b", true),
            ]),
        )]);
        let fragment = extract_fragment(tree);
        assert_eq!(names(&fragment), ["x", "y"]);
    }

    #[test]
    fn bare_fragment_at_top_level_is_extracted() {
        let tree = PlanTree::from_nodes(vec![PlanNode::new(
            TestElement::fragment_marker("frag"),
            PlanTree::from_nodes(vec![sampler("only", true)]),
        )]);
        assert_eq!(names(&extract_fragment(tree)), ["only"]);
    }

    #[test]
    fn no_fragment_yields_empty_tree() {
        let tree = PlanTree::from_nodes(vec![sampler("a", true), sampler("b", true)]);
        assert!(!contains_fragment(&tree));
        assert!(extract_fragment(tree).is_empty());
    }

    #[test]
    fn first_match_wins_over_later_siblings() {
        let tree = PlanTree::from_nodes(vec![
            PlanNode::new(
                TestElement::fragment_marker("first"),
                PlanTree::from_nodes(vec![sampler("from-first", true)]),
            ),
            PlanNode::new(
                TestElement::fragment_marker("second"),
                PlanTree::from_nodes(vec![sampler("from-second", true)]),
            ),
        ]);
        assert_eq!(names(&extract_fragment(tree)), ["from-first"]);
    }

    #[test]
    fn plan_root_descends_even_when_a_later_sibling_is_a_fragment() {
        // The scan commits to the first matching node in order: an empty plan
        // root shadows the fragment marker that follows it.
        let tree = PlanTree::from_nodes(vec![
            PlanNode::new(TestElement::plan_root("empty"), PlanTree::new()),
            PlanNode::new(
                TestElement::fragment_marker("frag"),
                PlanTree::from_nodes(vec![sampler("ignored", true)]),
            ),
        ]);
        assert!(extract_fragment(tree).is_empty());
    }

    #[test]
    fn disabled_removal_is_subtree_destructive() {
        // [A(enabled) -> [B(disabled) -> [C(enabled)]], D(disabled)]
        let mut tree = PlanTree::from_nodes(vec![
            PlanNode::new(
                TestElement::generic("a", "thread_group", true),
                PlanTree::from_nodes(vec![PlanNode::new(
                    TestElement::generic("b", "thread_group", false),
                    PlanTree::from_nodes(vec![sampler("c", true)]),
                )]),
            ),
            sampler("d", false),
        ]);
        remove_disabled_items(&mut tree);
        assert_eq!(names(&tree), ["a"]);
        assert!(tree.nodes()[0].children.is_empty());
    }

    #[test]
    fn enabled_nodes_are_recursed_into_at_any_depth() {
        let mut tree = PlanTree::from_nodes(vec![PlanNode::new(
            TestElement::generic("outer", "thread_group", true),
            PlanTree::from_nodes(vec![PlanNode::new(
                TestElement::generic("inner", "loop_controller", true),
                PlanTree::from_nodes(vec![sampler("keep", true), sampler("drop", false)]),
            )]),
        )]);
        remove_disabled_items(&mut tree);
        let inner = &tree.nodes()[0].children.nodes()[0];
        assert_eq!(names(&inner.children), ["keep"]);
    }

    #[test]
    fn removal_preserves_order_of_survivors() {
        let mut tree = PlanTree::from_nodes(vec![
            sampler("a", true),
            sampler("b", false),
            sampler("c", true),
            sampler("d", false),
            sampler("e", true),
        ]);
        remove_disabled_items(&mut tree);
        assert_eq!(names(&tree), ["a", "c", "e"]);
    }
}
