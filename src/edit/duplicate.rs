//! Duplicating a node and its subtree

use std::sync::Arc;

use crate::model::NodeId;
use crate::tree::ComponentTree;

use super::{splice_tree, Edit};

/// Place a copy of the node with `id` right after it
///
/// The copy and every node below it get fresh ids; attribute bags are copied
/// by value. Sibling spans are not renormalized.
pub fn duplicate(tree: &ComponentTree, id: &NodeId) -> Edit {
    let Some(original) = tree.find(id) else {
        return Edit::Unchanged;
    };
    let copy = Arc::new(original.clone_with_fresh_ids());

    splice_tree(tree, id, |node| vec![Arc::clone(node), Arc::clone(&copy)])
}
