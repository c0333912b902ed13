use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Presentation attributes for one node. Field names serialize camelCase
/// because the downstream renderer reads them as CSS-in-JS properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background_color: String,
    pub color: String,
    pub border: String,
    pub border_radius: String,
    pub padding: String,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

fn default_node_kind() -> String {
    "default".to_string()
}

fn default_edge_kind() -> String {
    "smoothstep".to_string()
}

fn default_animated() -> bool {
    true
}

/// A renderer-ready visual node. The serialized shape (`id`, `type`,
/// `position.{x,y}`, `data.label`, `style`) is a compatibility contract
/// with the external graph renderer and must not drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub id: String,
    #[serde(rename = "type", default = "default_node_kind")]
    pub kind: String,
    pub position: Point,
    pub data: NodeData,
    #[serde(default)]
    pub style: NodeStyle,
}

impl PositionedNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            kind: default_node_kind(),
            position,
            data: NodeData {
                label: label.into(),
            },
            style: NodeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    /// Copy of this node moved to `position`; everything else unchanged.
    pub fn at(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

/// A directed parent-to-child connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default = "default_edge_kind")]
    pub kind: String,
    #[serde(default = "default_animated")]
    pub animated: bool,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl VisualEdge {
    /// Edge ids are deterministic so re-layouts of the same tree produce
    /// identical documents.
    pub fn between(source: &str, target: &str, style: EdgeStyle) -> Self {
        Self {
            id: format!("e-{source}-{target}"),
            source: source.to_string(),
            target: target.to_string(),
            kind: default_edge_kind(),
            animated: default_animated(),
            style,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<VisualEdge>,
}

impl Layout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
