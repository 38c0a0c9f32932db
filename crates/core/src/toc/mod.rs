//! Heading extraction and table-of-contents building.

pub mod extractor;
pub mod slugger;

pub use extractor::{
    HeadingAnchor, MIN_TOC_HEADINGS, Toc, TocItem, build_toc, build_toc_from_ast,
    heading_anchors,
};
pub use slugger::{Slugger, slugify};
