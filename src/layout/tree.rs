use std::collections::HashSet;

use tracing::warn;

use super::{EdgeStyle, Layout, NodeStyle, Point, PositionedNode, VisualEdge};
use crate::config::LayoutConfig;
use crate::ir::TreeNode;
use crate::theme::Theme;

/// Assign coordinates and theme styling to every node of `root`, producing
/// renderer-ready nodes plus one directed edge per parent/child pair.
///
/// The root lands on the configured anchor. Each child is offset one
/// `vertical_spacing` below its parent, and `horizontal_spacing` left of it
/// for even sibling indices, right for odd ones. The resulting zig-zag fan
/// is the shape downstream views were built around, so it is kept as-is
/// rather than balanced.
///
/// Missing or malformed input degrades to an empty layout with a warning;
/// this function never fails, since callers invoke it optimistically while
/// data may still be loading.
pub fn layout_tree(root: Option<&TreeNode>, theme_name: &str, config: &LayoutConfig) -> Layout {
    let Some(root) = root else {
        warn!("mind map data is missing; returning an empty layout");
        return Layout::empty();
    };
    if !root.is_well_formed() {
        warn!(
            id = root.id.as_str(),
            name = root.name.as_str(),
            "mind map root lacks an id or name; returning an empty layout"
        );
        return Layout::empty();
    }

    let theme = Theme::named(theme_name);
    let node_style = theme.node_style();
    let edge_style = theme.edge_style();

    let mut layout = Layout::empty();
    let mut visited: HashSet<String> = HashSet::new();
    let anchor = Point::new(config.tree.anchor_x, config.tree.anchor_y);

    let mut walker = Walker {
        config,
        node_style: &node_style,
        edge_style: &edge_style,
        layout: &mut layout,
        visited: &mut visited,
    };
    walker.visit(root, None, 0, anchor);
    layout
}

struct Walker<'a> {
    config: &'a LayoutConfig,
    node_style: &'a NodeStyle,
    edge_style: &'a EdgeStyle,
    layout: &'a mut Layout,
    visited: &'a mut HashSet<String>,
}

impl Walker<'_> {
    /// Pre-order descent. `index` is the node's 0-based position among its
    /// siblings and decides which side of the parent it fans out to.
    fn visit(&mut self, node: &TreeNode, parent: Option<(&str, Point)>, index: usize, anchor: Point) {
        if !node.is_well_formed() {
            // Skipped nodes drop their whole subtree; promoting orphaned
            // descendants to the grandparent would silently reshape the
            // outline the model produced.
            warn!(
                id = node.id.as_str(),
                name = node.name.as_str(),
                children = node.children.len(),
                "skipping malformed node and its descendants"
            );
            return;
        }
        if !self.visited.insert(node.id.clone()) {
            warn!(
                id = node.id.as_str(),
                "node id seen twice (cycle or duplicate); skipping"
            );
            return;
        }

        let spacing = &self.config.tree;
        let position = match parent {
            Some((_, parent_pos)) => {
                let dx = if index % 2 == 0 {
                    -spacing.horizontal_spacing
                } else {
                    spacing.horizontal_spacing
                };
                Point::new(parent_pos.x + dx, parent_pos.y + spacing.vertical_spacing)
            }
            None => anchor,
        };

        self.layout.nodes.push(
            PositionedNode::new(&node.id, &node.name, position).with_style(self.node_style.clone()),
        );
        if let Some((parent_id, _)) = parent {
            self.layout
                .edges
                .push(VisualEdge::between(parent_id, &node.id, self.edge_style.clone()));
        }

        for (child_index, child) in node.children.iter().enumerate() {
            self.visit(child, Some((&node.id, position)), child_index, anchor);
        }
    }
}
