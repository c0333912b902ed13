pub mod config;
pub mod export;
pub mod ir;
pub mod layout;
pub mod theme;

pub use config::{LayoutConfig, load_config};
pub use ir::TreeNode;
pub use layout::{Layout, LayoutStrategy, PositionedNode, VisualEdge, apply_layout, layout_tree};
pub use theme::Theme;
