//! Read-only traversal over node sequences
//!
//! All searches are depth-first and pre-order: a node is visited before its
//! children, children in stored order. A missing id is an ordinary outcome.

use crate::model::{NodeId, NodeRef};

/// Where a node sits in the tree
#[derive(Debug, Clone, Copy)]
pub enum Location<'a> {
    /// Directly in the root sequence
    Root { index: usize },
    /// In the child list of `parent`
    Child { parent: &'a NodeRef, index: usize },
}

impl<'a> Location<'a> {
    /// Index within the containing sequence
    pub fn index(&self) -> usize {
        match self {
            Location::Root { index } | Location::Child { index, .. } => *index,
        }
    }

    /// The containing parent, or None at root level
    pub fn parent(&self) -> Option<&'a NodeRef> {
        match self {
            Location::Root { .. } => None,
            Location::Child { parent, .. } => Some(*parent),
        }
    }
}

/// Find the node with `id`
pub fn find_by_id<'a>(nodes: &'a [NodeRef], id: &NodeId) -> Option<&'a NodeRef> {
    walk(nodes).find(|node| &node.id == id)
}

/// Find the parent of the node with `id`
///
/// Returns None both for root-level nodes and for ids that are absent;
/// use [`locate`] to tell the two apart.
pub fn find_parent_of<'a>(nodes: &'a [NodeRef], id: &NodeId) -> Option<&'a NodeRef> {
    locate(nodes, id).and_then(|location| location.parent())
}

/// Find the containing sequence and index of the node with `id`
pub fn locate<'a>(nodes: &'a [NodeRef], id: &NodeId) -> Option<Location<'a>> {
    if let Some(index) = nodes.iter().position(|node| &node.id == id) {
        return Some(Location::Root { index });
    }
    locate_below(nodes, id)
}

fn locate_below<'a>(nodes: &'a [NodeRef], id: &NodeId) -> Option<Location<'a>> {
    for node in nodes {
        if let Some(index) = node.children.iter().position(|child| &child.id == id) {
            return Some(Location::Child {
                parent: node,
                index,
            });
        }
        if let Some(found) = locate_below(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Depth-first, pre-order iterator over every node
pub fn walk(nodes: &[NodeRef]) -> Walk<'_> {
    Walk {
        stack: vec![nodes.iter()],
    }
}

/// Iterator returned by [`walk`]
pub struct Walk<'a> {
    stack: Vec<std::slice::Iter<'a, NodeRef>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    self.stack.push(node.children.iter());
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
