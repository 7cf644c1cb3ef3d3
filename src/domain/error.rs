//! Domain-level errors (no I/O concerns)

use thiserror::Error;

use crate::domain::entities::NodeId;

/// Domain errors represent violations of the forest's structural rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("node {0} cannot be its own parent")]
    SelfParent(NodeId),

    #[error("cycle detected in parent chain starting at node {0}")]
    CycleDetected(NodeId),

    #[error("invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
