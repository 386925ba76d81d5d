//! Plain-text rendering of plan trees for terminal output.

use rfi_core::plan::{ElementKind, PlanNode, PlanTree};

pub(crate) fn render_tree(tree: &PlanTree) -> String {
    let mut out = String::new();
    for node in tree.nodes() {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &PlanNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let kind = match node.element.kind() {
        ElementKind::TestPlan => "test_plan",
        ElementKind::TestFragment => "test_fragment",
        ElementKind::Generic { element_type, .. } => element_type.as_str(),
    };
    let disabled = if node.element.is_enabled() {
        ""
    } else {
        " [disabled]"
    };
    out.push_str(&format!(
        "{}{} ({}){}\n",
        indent,
        node.element.name(),
        kind,
        disabled
    ));
    for child in node.children.nodes() {
        render_node(child, depth + 1, out);
    }
}
