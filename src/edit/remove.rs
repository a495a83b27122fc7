//! Removing a node together with its subtree

use crate::model::NodeId;
use crate::tree::ComponentTree;

use super::{splice_tree, Edit};

/// Remove the node with `id` and all of its descendants
///
/// Remaining siblings keep their spans; the row is not renormalized.
pub fn remove(tree: &ComponentTree, id: &NodeId) -> Edit {
    splice_tree(tree, id, |_| Vec::new())
}
