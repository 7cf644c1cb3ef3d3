//! In-memory parent-pointer forest with ancestor and descendant traversals.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use tracing::instrument;

use crate::domain::entities::{Node, NodeId};
use crate::domain::error::{DomainError, DomainResult};

/// Adjacency structure over a forest of parent-linked nodes.
///
/// Parent pointers are the source of truth; child links are maintained as an
/// inverted index so descendant walks do not scan the whole node set. A parent
/// id may reference a node that has not been inserted (yet): dataset rows are
/// not required to arrive in topological order, and an ancestor walk simply
/// stops when the chain leaves the known node set.
#[derive(Debug, Default)]
pub struct Forest {
    /// node id -> parent id (None for roots)
    parents: BTreeMap<NodeId, Option<NodeId>>,
    /// parent id -> child ids, insertion order
    children: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node with an optional parent link.
    ///
    /// Rejects duplicate ids and self-parenting. Cycles cannot be fully ruled
    /// out at insert time because dangling parent references are allowed, so
    /// the ancestor walk carries its own cycle defense.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, id: NodeId, parent_id: Option<NodeId>) -> DomainResult<()> {
        if self.parents.contains_key(&id) {
            return Err(DomainError::DuplicateNode(id));
        }
        if parent_id == Some(id) {
            return Err(DomainError::SelfParent(id));
        }

        self.parents.insert(id, parent_id);
        if let Some(parent) = parent_id {
            self.children.entry(parent).or_default().push(id);
        }
        Ok(())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.parents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Parent of a node, None for roots.
    pub fn parent(&self, id: NodeId) -> DomainResult<Option<NodeId>> {
        self.parents
            .get(&id)
            .copied()
            .ok_or(DomainError::NodeNotFound(id))
    }

    /// Children of a node, in insertion order. Unknown ids have no children.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes without a parent, ascending. A node whose parent id is not in
    /// the forest is treated as a root of its own component.
    pub fn roots(&self) -> Vec<NodeId> {
        self.parents
            .iter()
            .filter(|(_, parent)| match parent {
                None => true,
                Some(p) => !self.parents.contains_key(p),
            })
            .map(|(&id, _)| id)
            .collect()
    }

    /// Ancestor path of a node, root first, the node itself last.
    ///
    /// Always has length >= 1: a root is its own sole ancestor. Walks parent
    /// links upward collecting ids, then reverses. The walk stops when it
    /// reaches a root or a parent id unknown to the forest, and fails if it
    /// revisits a node (corrupted parent chain).
    #[instrument(level = "debug", skip(self))]
    pub fn ancestor_path(&self, id: NodeId) -> DomainResult<Vec<NodeId>> {
        if !self.contains(id) {
            return Err(DomainError::NodeNotFound(id));
        }

        let mut path = vec![id];
        let mut seen: HashSet<NodeId> = HashSet::from([id]);
        let mut current = id;

        while let Some(Some(parent)) = self.parents.get(&current) {
            if !self.parents.contains_key(parent) {
                // Dangling parent reference: chain ends here
                break;
            }
            if !seen.insert(*parent) {
                return Err(DomainError::CycleDetected(id));
            }
            path.push(*parent);
            current = *parent;
        }

        path.reverse();
        Ok(path)
    }

    /// Transitive descendant closure of a seed set, ascending and deduplicated.
    ///
    /// Every seed that exists is included (a node is its own descendant at
    /// depth 0). Unknown and duplicate seeds are silently ignored; an
    /// all-unknown seed set yields an empty result rather than an error.
    #[instrument(level = "debug", skip(self, seeds))]
    pub fn descendant_ids<I>(&self, seeds: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut result: BTreeSet<NodeId> = BTreeSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        for seed in seeds {
            if self.contains(seed) && result.insert(seed) {
                queue.push_back(seed);
            }
        }

        while let Some(current) = queue.pop_front() {
            for &child in self.children(current) {
                if result.insert(child) {
                    queue.push_back(child);
                }
            }
        }

        result.into_iter().collect()
    }

    /// All nodes, ascending by id.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.parents.iter().map(|(&id, &parent_id)| Node { id, parent_id })
    }
}
