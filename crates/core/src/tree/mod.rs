//! Navigation tree built from the notes directory.

pub mod builder;
pub mod collate;
pub mod types;

pub use builder::{build_tree, render_text};
pub use collate::{compare_nodes, natural_cmp};
pub use types::TreeNode;
