//! Common-ancestor service
//!
//! Resolves ancestor paths through the store boundary and runs the lock-step
//! comparison on them.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::ancestry::common_ancestry;
use crate::domain::entities::{CommonAncestry, NodeId};
use crate::infrastructure::traits::{NodeStore, StoreError};

/// Service answering lowest-common-ancestor queries.
pub struct AncestryService {
    store: Arc<dyn NodeStore>,
}

impl AncestryService {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    /// Shared root, lowest common ancestor and divergence depth of two nodes.
    ///
    /// A missing node or disjoint trees yield the all-absent result, never an
    /// error. Only store-level infrastructure failures propagate. The two
    /// path lookups run independently so either can be served from a cache
    /// later.
    pub fn common_ancestor(&self, a: NodeId, b: NodeId) -> ApplicationResult<CommonAncestry> {
        debug!("common_ancestor: a={a}, b={b}");

        let path_a = match self.path_or_absent(a)? {
            Some(path) => path,
            None => return Ok(CommonAncestry::absent()),
        };
        let path_b = match self.path_or_absent(b)? {
            Some(path) => path,
            None => return Ok(CommonAncestry::absent()),
        };

        let result = common_ancestry(&path_a, &path_b);
        debug!("common_ancestor: result={result:?}");
        Ok(result)
    }

    /// Root-to-self ancestor path of a single node.
    pub fn ancestor_path(&self, id: NodeId) -> ApplicationResult<Vec<NodeId>> {
        debug!("ancestor_path: id={id}");
        self.store.ancestor_path(id).map_err(ApplicationError::from)
    }

    /// Resolve a path, converting `NotFound` into None.
    fn path_or_absent(&self, id: NodeId) -> ApplicationResult<Option<Vec<NodeId>>> {
        match self.store.ancestor_path(id) {
            Ok(path) => Ok(Some(path)),
            Err(StoreError::NotFound(id)) => {
                debug!("common_ancestor: node {id} not found, reporting absent");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
