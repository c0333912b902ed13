use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::layout::{EdgeStyle, NodeStyle};

/// A named bundle of presentation attributes applied uniformly to every
/// node and edge produced by one layout call. Radius and padding stay as
/// CSS strings because the downstream renderer consumes them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub node_background_color: String,
    pub node_color: String,
    pub node_border_color: String,
    pub node_border_radius: String,
    pub node_padding: String,
    pub edge_stroke_color: String,
    pub edge_stroke_width: f32,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            node_background_color: "#F5F5F5".to_string(),
            node_color: "#333333".to_string(),
            node_border_color: "#CCCCCC".to_string(),
            node_border_radius: "5px".to_string(),
            node_padding: "10px 15px".to_string(),
            edge_stroke_color: "#888888".to_string(),
            edge_stroke_width: 2.0,
            font_family: "Arial, \"Helvetica Neue\", Helvetica, sans-serif".to_string(),
        }
    }
}

impl Theme {
    pub fn modern() -> Self {
        Self {
            node_background_color: "#F0F4F8".to_string(),
            node_color: "#2C3E50".to_string(),
            node_border_color: "#BDC3C7".to_string(),
            node_border_radius: "6px".to_string(),
            node_padding: "10px 15px".to_string(),
            edge_stroke_color: "#3498DB".to_string(),
            edge_stroke_width: 2.0,
            font_family: "Arial, \"Helvetica Neue\", Helvetica, sans-serif".to_string(),
        }
    }

    pub fn nature() -> Self {
        Self {
            node_background_color: "#E8F5E9".to_string(),
            node_color: "#38761D".to_string(),
            node_border_color: "#A9D18E".to_string(),
            node_border_radius: "10px".to_string(),
            node_padding: "12px 18px".to_string(),
            edge_stroke_color: "#609966".to_string(),
            edge_stroke_width: 2.0,
            font_family: "Georgia, \"Times New Roman\", Times, serif".to_string(),
        }
    }

    pub fn tech() -> Self {
        Self {
            node_background_color: "#222222".to_string(),
            node_color: "#00FF00".to_string(),
            node_border_color: "#00FF00".to_string(),
            node_border_radius: "4px".to_string(),
            node_padding: "10px 15px".to_string(),
            edge_stroke_color: "#00CCFF".to_string(),
            edge_stroke_width: 2.5,
            font_family: "\"Courier New\", Courier, monospace".to_string(),
        }
    }

    pub fn classic() -> Self {
        Self {
            node_background_color: "#FFFFFF".to_string(),
            node_color: "#000000".to_string(),
            node_border_color: "#000000".to_string(),
            node_border_radius: "0px".to_string(),
            node_padding: "10px 15px".to_string(),
            edge_stroke_color: "#555555".to_string(),
            edge_stroke_width: 1.5,
            font_family: "\"Times New Roman\", Times, serif".to_string(),
        }
    }

    pub fn creative() -> Self {
        Self {
            node_background_color: "#FFFACD".to_string(),
            node_color: "#D9534F".to_string(),
            node_border_color: "#FFB6C1".to_string(),
            node_border_radius: "15px".to_string(),
            node_padding: "12px 20px".to_string(),
            edge_stroke_color: "#5BC0DE".to_string(),
            edge_stroke_width: 2.0,
            font_family: "\"Comic Sans MS\", \"Trebuchet MS\", cursive, sans-serif".to_string(),
        }
    }

    /// Resolve a theme by name. Unknown names fall back to the default
    /// theme rather than erroring: theme choice comes from user input.
    pub fn named(name: &str) -> Theme {
        THEMES.get(name).cloned().unwrap_or_default()
    }

    pub fn node_style(&self) -> NodeStyle {
        NodeStyle {
            background_color: self.node_background_color.clone(),
            color: self.node_color.clone(),
            border: format!("1px solid {}", self.node_border_color),
            border_radius: self.node_border_radius.clone(),
            padding: self.node_padding.clone(),
            font_family: self.font_family.clone(),
        }
    }

    pub fn edge_style(&self) -> EdgeStyle {
        EdgeStyle {
            stroke: self.edge_stroke_color.clone(),
            stroke_width: self.edge_stroke_width,
        }
    }
}

static THEMES: Lazy<BTreeMap<&'static str, Theme>> = Lazy::new(|| {
    BTreeMap::from([
        ("modern", Theme::modern()),
        ("nature", Theme::nature()),
        ("tech", Theme::tech()),
        ("classic", Theme::classic()),
        ("creative", Theme::creative()),
        ("default", Theme::default()),
    ])
});

/// Registered theme names, in table order.
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.keys().copied()
}
