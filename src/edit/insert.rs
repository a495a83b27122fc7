//! Inserting a new node at the drop position

use std::sync::Arc;

use tracing::trace;

use crate::geometry::GeometryProvider;
use crate::model::{Node, NodeId};
use crate::tree::ComponentTree;

use super::drop::resolve_drop_index;
use super::normalize::normalize;
use super::{splice_tree, Edit};

/// Insert `node` under `parent` (or at root level) where the pointer points
///
/// At root level the spans of other roots are left alone. Under a parent,
/// every child of that parent, the new one included, is given an even span
/// afterwards. An unknown or non-container parent leaves the tree unchanged.
pub fn insert(
    tree: &ComponentTree,
    parent: Option<&NodeId>,
    node: Node,
    pointer_x: f64,
    geometry: &dyn GeometryProvider,
) -> Edit {
    debug_assert!(!tree.contains(&node.id), "node id {} already in tree", node.id);

    let Some(parent_id) = parent else {
        let index = resolve_drop_index(geometry, None, tree.roots(), pointer_x);
        let mut roots = tree.roots().to_vec();
        roots.insert(index, Arc::new(node));
        return Edit::Changed(ComponentTree::from_roots(roots));
    };

    match tree.find(parent_id) {
        None => {
            trace!(parent = %parent_id, "drop target not found");
            return Edit::Unchanged;
        }
        Some(target) if !target.is_container() => {
            trace!(parent = %parent_id, kind = target.kind.name(), "drop target is not a container");
            return Edit::Unchanged;
        }
        Some(_) => {}
    }

    let mut node = Some(node);
    splice_tree(tree, parent_id, |target| {
        let index = resolve_drop_index(geometry, Some(parent_id), &target.children, pointer_x);
        let mut children = target.children.clone();
        if let Some(node) = node.take() {
            children.insert(index, Arc::new(node));
        }
        vec![Arc::new(target.replace_children(normalize(&children)))]
    })
}
