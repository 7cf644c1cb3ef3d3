//! Domain entities: core data structures

use serde::Serialize;

/// Identifier of a node in the forest.
pub type NodeId = i64;

/// Identifier of a bird record.
pub type BirdId = i64;

/// A node in a parent-pointer forest.
///
/// A node with no parent is a root. Multiple disjoint trees may coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Parent node id, None for roots
    pub parent_id: Option<NodeId>,
}

/// A bird record, owned by exactly one node.
///
/// Birds hang off the tree but are not part of its structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    pub id: BirdId,
    /// Owning node
    pub node_id: NodeId,
    pub name: String,
}

/// Wire shape for a bird record.
///
/// Field names and order are part of the JSON contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirdDetail {
    pub id: BirdId,
    pub node_id: NodeId,
    pub name: String,
}

impl From<&Bird> for BirdDetail {
    fn from(bird: &Bird) -> Self {
        Self {
            id: bird.id,
            node_id: bird.node_id,
            name: bird.name.clone(),
        }
    }
}

/// Result of a common-ancestor query.
///
/// All three fields are present together or absent together. The all-absent
/// value means "no shared ancestry or a queried node does not exist" and is a
/// normal outcome, not an error. Serialized as a flat JSON object with nulls,
/// which is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonAncestry {
    /// First shared ancestor, i.e. the shared root
    pub root_id: Option<NodeId>,
    /// Deepest shared ancestor
    pub lowest_common_ancestor: Option<NodeId>,
    /// Count of matched ancestor positions, 1 for a root-level match
    pub depth: Option<u64>,
}

impl CommonAncestry {
    /// The "no shared ancestry" result.
    pub fn absent() -> Self {
        Self {
            root_id: None,
            lowest_common_ancestor: None,
            depth: None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.root_id.is_none()
    }
}
