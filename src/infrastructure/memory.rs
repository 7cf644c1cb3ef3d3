//! In-memory node store backed by the domain forest.

use std::collections::BTreeMap;

use crate::domain::entities::{Bird, BirdId, NodeId};
use crate::domain::error::DomainError;
use crate::domain::forest::Forest;
use crate::infrastructure::traits::{NodeStore, StoreError, StoreResult};

/// `NodeStore` over an in-memory `Forest` plus a bird map.
///
/// Birds are keyed by bird id in a `BTreeMap`, so every bird scan is already
/// in the ascending-by-bird-id order the wire contract requires.
#[derive(Debug, Default)]
pub struct MemoryStore {
    forest: Forest,
    birds: BTreeMap<BirdId, Bird>,
}

impl MemoryStore {
    pub fn new(forest: Forest, birds: impl IntoIterator<Item = Bird>) -> Self {
        Self {
            forest,
            birds: birds.into_iter().map(|b| (b.id, b)).collect(),
        }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn bird_count(&self) -> usize {
        self.birds.len()
    }
}

impl NodeStore for MemoryStore {
    fn ancestor_path(&self, id: NodeId) -> StoreResult<Vec<NodeId>> {
        self.forest.ancestor_path(id).map_err(|e| match e {
            DomainError::NodeNotFound(id) => StoreError::NotFound(id),
            other => StoreError::Unavailable {
                context: format!("ancestor walk from node {id}"),
                source: Box::new(other),
            },
        })
    }

    fn descendant_ids(&self, seeds: &[NodeId]) -> StoreResult<Vec<NodeId>> {
        Ok(self.forest.descendant_ids(seeds.iter().copied()))
    }

    fn birds_for_nodes(&self, node_ids: &[NodeId]) -> StoreResult<Vec<Bird>> {
        // node_ids is sorted closure output, binary_search keeps this O(b log n)
        Ok(self
            .birds
            .values()
            .filter(|bird| node_ids.binary_search(&bird.node_id).is_ok())
            .cloned()
            .collect())
    }

    fn roots(&self) -> StoreResult<Vec<NodeId>> {
        Ok(self.forest.roots())
    }

    fn children(&self, id: NodeId) -> StoreResult<Vec<NodeId>> {
        Ok(self.forest.children(id).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_birds() -> MemoryStore {
        let mut forest = Forest::new();
        forest.insert(123, None).unwrap();
        forest.insert(456, Some(123)).unwrap();
        forest.insert(789, None).unwrap();
        let birds = vec![
            Bird { id: 2, node_id: 456, name: "jane".into() },
            Bird { id: 1, node_id: 456, name: "joe".into() },
            Bird { id: 3, node_id: 789, name: "jimmy".into() },
        ];
        MemoryStore::new(forest, birds)
    }

    #[test]
    fn birds_come_back_ordered_by_bird_id() {
        let store = store_with_birds();
        let birds = store.birds_for_nodes(&[456, 789]).unwrap();
        let ids: Vec<_> = birds.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn not_found_maps_to_store_error() {
        let store = store_with_birds();
        assert!(matches!(
            store.ancestor_path(42),
            Err(StoreError::NotFound(42))
        ));
    }

    #[test]
    fn cycle_maps_to_unavailable() {
        let mut forest = Forest::new();
        forest.insert(1, Some(2)).unwrap();
        forest.insert(2, Some(1)).unwrap();
        let store = MemoryStore::new(forest, []);
        assert!(matches!(
            store.ancestor_path(1),
            Err(StoreError::Unavailable { .. })
        ));
    }
}
