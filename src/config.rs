use serde::{Deserialize, Serialize};
use std::path::Path;

/// Spacing for the parent-relative tree traversal. The anchor replaces the
/// viewport-relative root placement of earlier renderers: callers that want
/// the root centred pass their own centre instead of the engine reading
/// display state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 200.0,
            vertical_spacing: 100.0,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_spacing: 200.0 }
    }
}

/// Shared by the horizontal and vertical strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    pub spacing: f32,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self { spacing: 200.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialConfig {
    pub center_x: f32,
    pub center_y: f32,
    /// Scaled by sqrt(node count) to give the ring radius, so crowding
    /// grows slower than the node count.
    pub spacing: f32,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            spacing: 120.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    pub level_spacing: f32,
    pub sibling_spacing: f32,
    pub center_x: f32,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            level_spacing: 150.0,
            sibling_spacing: 200.0,
            center_x: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub tree: TreeConfig,
    pub grid: GridConfig,
    pub linear: LinearConfig,
    pub radial: RadialConfig,
    pub hierarchy: HierarchyConfig,
}

/// Load a config file, merging partial JSON over the defaults. `None`
/// yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: LayoutConfig = serde_json::from_str(&contents)?;
    Ok(config)
}
