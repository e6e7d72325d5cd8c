//! Styling functionality
//!
//! This crate connects CSS3 and HTML5 into a styling pipeline: every node of a document gets a
//! map of computed properties built from the default styles, inherited values and the matching
//! rules of a stylesheet.

pub mod defaults;
pub mod styled_node;
pub mod styling;
