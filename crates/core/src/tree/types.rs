use serde::Serialize;

/// A node of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum TreeNode {
    /// A directory with at least one note somewhere below it.
    Folder { name: String, path_parts: Vec<String>, children: Vec<TreeNode> },
    /// A note. `path_parts` ends with the file stem.
    File {
        title: String,
        /// `YYYY-MM-DD`.
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<String>,
        path_parts: Vec<String>,
    },
}

impl TreeNode {
    /// Folder name or file title; what the sidebar shows and sorts by.
    pub fn display_name(&self) -> &str {
        match self {
            TreeNode::Folder { name, .. } => name,
            TreeNode::File { title, .. } => title,
        }
    }

    pub fn path_parts(&self) -> &[String] {
        match self {
            TreeNode::Folder { path_parts, .. } | TreeNode::File { path_parts, .. } => path_parts,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }

    /// `/`-joined path, the note's slug for file nodes.
    pub fn slug(&self) -> String {
        self.path_parts().join("/")
    }
}
