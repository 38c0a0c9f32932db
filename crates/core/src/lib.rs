//! Core library for mdsite: a markdown notes directory turned into a
//! navigable site (slugs, navigation tree, table of contents, covers, feed).

pub mod config;
pub mod cover;
pub mod feed;
pub mod frontmatter;
pub mod notes;
pub mod posts;
pub mod render;
pub mod slug;
pub mod toc;
pub mod tree;
