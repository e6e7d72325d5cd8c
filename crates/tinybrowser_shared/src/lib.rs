//! Shared functionality
//!
//! This crate supplies the pieces that the html5, css3 and styling crates have in common: node
//! identifiers, the error type and the element trait the selector matcher works against.
//!

pub mod errors;
pub mod node;
pub mod traits;
pub mod types;
