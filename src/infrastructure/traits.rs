//! I/O boundary traits for testability
//!
//! These traits abstract the node store and the filesystem, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::domain::entities::{Bird, NodeId};

/// Errors surfaced at the node store boundary.
///
/// `NotFound` is a recoverable, per-query outcome: the common-ancestor path
/// catches it and reports "no shared ancestry". `Unavailable` is an
/// infrastructure failure and always propagates to the caller.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("node not found: {0}")]
    NotFound(NodeId),

    #[error("node store unavailable: {context}")]
    Unavailable {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for node store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to the node forest and its bird records.
///
/// All operations are side-effect-free, so concurrent queries need no locking
/// beyond what an implementation uses internally.
pub trait NodeStore: Send + Sync {
    /// Root-to-self ancestor chain of a node. Fails with `NotFound` if the id
    /// does not exist.
    fn ancestor_path(&self, id: NodeId) -> StoreResult<Vec<NodeId>>;

    /// Transitive descendant closure of a seed set (inclusive of seeds that
    /// exist), deduplicated, ascending. Unknown ids are simply absent from
    /// the result.
    fn descendant_ids(&self, seeds: &[NodeId]) -> StoreResult<Vec<NodeId>>;

    /// Birds owned by any of the given nodes, ascending by bird id.
    fn birds_for_nodes(&self, node_ids: &[NodeId]) -> StoreResult<Vec<Bird>>;

    /// All root node ids, ascending.
    fn roots(&self) -> StoreResult<Vec<NodeId>>;

    /// Children of a node, for display purposes.
    fn children(&self, id: NodeId) -> StoreResult<Vec<NodeId>>;
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
