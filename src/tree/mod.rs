//! The component tree: an ordered forest of nodes
//!
//! A tree value is an immutable snapshot. Edits build a new tree that shares
//! every untouched subtree with the old one.

pub mod locator;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Node, NodeId, NodeRef};

pub use locator::{find_by_id, find_parent_of, locate, walk, Location, Walk};

/// Ordered sequence of root nodes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentTree {
    roots: Vec<NodeRef>,
}

impl ComponentTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree from root handles
    pub fn from_roots(roots: Vec<NodeRef>) -> Self {
        Self { roots }
    }

    /// Create a tree from owned root nodes
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self::from_roots(nodes.into_iter().map(NodeRef::new).collect())
    }

    pub fn roots(&self) -> &[NodeRef] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of root nodes
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Number of nodes at every depth
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Depth of the deepest node, 0 for an empty tree
    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[NodeRef]) -> usize {
            nodes
                .iter()
                .map(|node| 1 + depth_of(&node.children))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.roots)
    }

    /// Depth-first, pre-order iteration over every node
    pub fn iter(&self) -> Walk<'_> {
        walk(&self.roots)
    }

    pub fn find(&self, id: &NodeId) -> Option<&NodeRef> {
        find_by_id(&self.roots, id)
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeRef> {
        find_parent_of(&self.roots, id)
    }

    pub fn locate(&self, id: &NodeId) -> Option<Location<'_>> {
        locate(&self.roots, id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Ids of every node in the tree
    pub fn ids(&self) -> HashSet<NodeId> {
        self.iter().map(|node| node.id.clone()).collect()
    }

    /// First id that occurs more than once, if any
    pub fn first_duplicate_id(&self) -> Option<&NodeId> {
        let mut seen = HashSet::new();
        self.iter()
            .map(|node| &node.id)
            .find(|id| !seen.insert(*id))
    }

    /// Child sequence of `parent`, or the root sequence when `parent` is None
    pub fn siblings(&self, parent: Option<&NodeId>) -> Option<&[NodeRef]> {
        match parent {
            None => Some(&self.roots),
            Some(id) => self.find(id).map(|node| node.children.as_slice()),
        }
    }
}
