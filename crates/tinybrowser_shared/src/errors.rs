//! Error results that can be returned from the tinybrowser crates
use crate::node::NodeId;
use thiserror::Error;

/// Errors raised by the tree-mutation operations. Malformed markup or CSS never ends up here,
/// the parsers recover from those on their own.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}
