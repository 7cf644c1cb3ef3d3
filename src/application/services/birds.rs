//! Descendant bird service
//!
//! Filters bird records by descendant-closure membership.

use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::domain::entities::{BirdDetail, NodeId};
use crate::infrastructure::traits::NodeStore;

/// Service answering "all birds below these nodes" queries.
pub struct BirdService {
    store: Arc<dyn NodeStore>,
}

impl BirdService {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    /// Birds owned by any node in the descendant closure of the seed set,
    /// ascending by bird id.
    ///
    /// Unknown seed ids are silently ignored; an empty closure yields an
    /// empty list, never an error.
    pub fn for_all_descendants_of(&self, seeds: &[NodeId]) -> ApplicationResult<Vec<BirdDetail>> {
        debug!("for_all_descendants_of: {} seeds", seeds.len());

        let closure = self.store.descendant_ids(seeds)?;
        if closure.is_empty() {
            return Ok(Vec::new());
        }
        debug!("for_all_descendants_of: closure has {} nodes", closure.len());

        let birds = self.store.birds_for_nodes(&closure)?;
        Ok(birds.iter().map(BirdDetail::from).collect())
    }

    /// Sorted descendant closure of the seed set.
    pub fn descendant_ids(&self, seeds: &[NodeId]) -> ApplicationResult<Vec<NodeId>> {
        debug!("descendant_ids: {} seeds", seeds.len());
        Ok(self.store.descendant_ids(seeds)?)
    }
}
