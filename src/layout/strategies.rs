use std::f32::consts::{FRAC_PI_2, TAU};

use super::{Point, PositionedNode};
use crate::config::{GridConfig, LinearConfig, RadialConfig};

/// Row-major square-ish grid: `ceil(sqrt(n))` columns.
pub(super) fn grid(nodes: &[PositionedNode], config: &GridConfig) -> Vec<PositionedNode> {
    let columns = (nodes.len() as f32).sqrt().ceil().max(1.0) as usize;
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let row = index / columns;
            let col = index % columns;
            node.at(Point::new(
                col as f32 * config.cell_spacing,
                row as f32 * config.cell_spacing,
            ))
        })
        .collect()
}

pub(super) fn horizontal(nodes: &[PositionedNode], config: &LinearConfig) -> Vec<PositionedNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| node.at(Point::new(index as f32 * config.spacing, 0.0)))
        .collect()
}

pub(super) fn vertical(nodes: &[PositionedNode], config: &LinearConfig) -> Vec<PositionedNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| node.at(Point::new(0.0, index as f32 * config.spacing)))
        .collect()
}

/// Even spread around a circle, starting at twelve o'clock and going
/// clockwise. The radius grows with sqrt(n) so dense maps spread out.
pub(super) fn radial(nodes: &[PositionedNode], config: &RadialConfig) -> Vec<PositionedNode> {
    let total = nodes.len() as f32;
    let radius = config.spacing * total.sqrt();
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let angle = (index as f32 / total) * TAU - FRAC_PI_2;
            node.at(Point::new(
                config.center_x + radius * angle.cos(),
                config.center_y + radius * angle.sin(),
            ))
        })
        .collect()
}
