//! Dataset loading service
//!
//! Reads the node and bird files through the filesystem boundary and builds
//! an in-memory store from them.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::dataset::{parse_birds, parse_nodes};
use crate::domain::forest::Forest;
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::traits::FileSystem;

/// Service assembling a `MemoryStore` from dataset files.
pub struct DatasetService {
    fs: Arc<dyn FileSystem>,
}

impl DatasetService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load nodes and birds into a store.
    ///
    /// Node rows may arrive in any order; forward parent references are
    /// resolved by the forest itself. A missing birds file is tolerated (a
    /// forest without birds is valid), a missing nodes file is not.
    pub fn load(&self, nodes_file: &Path, birds_file: &Path) -> ApplicationResult<MemoryStore> {
        debug!(
            "load: nodes={}, birds={}",
            nodes_file.display(),
            birds_file.display()
        );

        let content = self.fs.read_to_string(nodes_file).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("read nodes file {}", nodes_file.display()),
                source: Box::new(e),
            }
        })?;

        let mut forest = Forest::new();
        for row in parse_nodes(&content)? {
            forest.insert(row.id, row.parent_id)?;
        }
        debug!("load: {} nodes", forest.len());

        let birds = if self.fs.exists(birds_file) {
            let content = self.fs.read_to_string(birds_file).map_err(|e| {
                ApplicationError::OperationFailed {
                    context: format!("read birds file {}", birds_file.display()),
                    source: Box::new(e),
                }
            })?;
            parse_birds(&content)?
        } else {
            debug!("load: birds file missing, loading forest only");
            Vec::new()
        };

        let store = MemoryStore::new(forest, birds);
        debug!("load: {} birds", store.bird_count());
        Ok(store)
    }
}
