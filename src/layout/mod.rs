mod hierarchy;
mod strategies;
mod tree;
pub(crate) mod types;

pub use tree::layout_tree;
pub use types::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::LayoutConfig;

/// Algorithm used to re-position an already-flat node/edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    Grid,
    Horizontal,
    Vertical,
    Radial,
    Hierarchy,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 5] = [
        LayoutStrategy::Grid,
        LayoutStrategy::Horizontal,
        LayoutStrategy::Vertical,
        LayoutStrategy::Radial,
        LayoutStrategy::Hierarchy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutStrategy::Grid => "grid",
            LayoutStrategy::Horizontal => "horizontal",
            LayoutStrategy::Vertical => "vertical",
            LayoutStrategy::Radial => "radial",
            LayoutStrategy::Hierarchy => "hierarchy",
        }
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown layout strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for LayoutStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(LayoutStrategy::Grid),
            "horizontal" => Ok(LayoutStrategy::Horizontal),
            "vertical" => Ok(LayoutStrategy::Vertical),
            "radial" => Ok(LayoutStrategy::Radial),
            "hierarchy" => Ok(LayoutStrategy::Hierarchy),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Re-position `nodes` with the chosen strategy. Inputs are never mutated:
/// the result is a fresh node list with only `position` replaced, so the
/// caller's undo history keeps working. The edge list is only consulted
/// (by the hierarchy strategy) and never rewritten.
pub fn apply_layout(
    nodes: &[PositionedNode],
    edges: &[VisualEdge],
    strategy: LayoutStrategy,
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    if nodes.is_empty() {
        // Short-circuit before any per-strategy math; grid and radial
        // divide by the node count.
        return Vec::new();
    }
    match strategy {
        LayoutStrategy::Grid => strategies::grid(nodes, &config.grid),
        LayoutStrategy::Horizontal => strategies::horizontal(nodes, &config.linear),
        LayoutStrategy::Vertical => strategies::vertical(nodes, &config.linear),
        LayoutStrategy::Radial => strategies::radial(nodes, &config.radial),
        LayoutStrategy::Hierarchy => hierarchy::hierarchy(nodes, edges, &config.hierarchy),
    }
}
