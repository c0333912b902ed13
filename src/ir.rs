use serde::{Deserialize, Serialize};

/// One concept in a hierarchical mind map outline. Child order is
/// significant: it decides which side of the parent a child lands on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// A node the layout engine will accept: both id and name present.
    /// Upstream JSON is parsed from model output and may drop either field.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }
}
