use std::collections::{HashMap, VecDeque};

use super::{Point, PositionedNode, VisualEdge};
use crate::config::HierarchyConfig;

/// Level-banded placement: every node with no incoming edge is a root
/// (forests work), levels are BFS distance from the nearest root, and each
/// level's nodes sit on one horizontal band, centred and evenly spaced.
/// BFS visited-bookkeeping bounds traversal, so cyclic edge sets terminate.
pub(super) fn hierarchy(
    nodes: &[PositionedNode],
    edges: &[VisualEdge],
    config: &HierarchyConfig,
) -> Vec<PositionedNode> {
    let mut incoming: HashMap<&str, usize> = HashMap::new();
    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();
    for node in nodes {
        incoming.entry(node.id.as_str()).or_insert(0);
    }
    for edge in edges {
        // Edges referencing unknown nodes are ignored rather than invented.
        if !incoming.contains_key(edge.source.as_str())
            || !incoming.contains_key(edge.target.as_str())
        {
            continue;
        }
        *incoming.entry(edge.target.as_str()).or_insert(0) += 1;
        outgoing
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut levels: HashMap<&str, usize> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    for node in nodes {
        if incoming.get(node.id.as_str()) == Some(&0) {
            levels.insert(node.id.as_str(), 0);
            queue.push_back(node.id.as_str());
        }
    }
    while let Some(id) = queue.pop_front() {
        let level = levels[id];
        if let Some(targets) = outgoing.get(id) {
            for target in targets {
                if !levels.contains_key(target) {
                    levels.insert(target, level + 1);
                    queue.push_back(target);
                }
            }
        }
    }

    // Anything BFS never reached (cycle members with no root above them)
    // goes on its own band below the main hierarchy.
    let max_level = levels.values().copied().max().unwrap_or(0);
    let orphan_level = max_level + 1;

    let mut bands: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut node_levels: Vec<usize> = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        let level = levels.get(node.id.as_str()).copied().unwrap_or(orphan_level);
        node_levels.push(level);
        bands.entry(level).or_default().push(index);
    }

    let mut positions: Vec<Point> = vec![Point::default(); nodes.len()];
    for (level, members) in &bands {
        let count = members.len() as f32;
        for (slot, &index) in members.iter().enumerate() {
            let x = config.center_x + (slot as f32 - (count - 1.0) / 2.0) * config.sibling_spacing;
            let y = *level as f32 * config.level_spacing;
            positions[index] = Point::new(x, y);
        }
    }

    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| node.at(positions[index]))
        .collect()
}
