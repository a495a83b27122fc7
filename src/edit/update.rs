//! Replacing a node's attribute bag, and clearing the canvas

use std::sync::Arc;

use crate::model::{AttributeBag, NodeId};
use crate::tree::ComponentTree;

use super::{splice_tree, Edit};

/// Replace the whole attribute bag of the node with `id`
///
/// Setting a bag equal to the current one is not an edit. Spans written here
/// are authoritative until the next insertion into the same parent.
pub fn update_config(tree: &ComponentTree, id: &NodeId, config: AttributeBag) -> Edit {
    match tree.find(id) {
        Some(node) if node.config != config => {}
        _ => return Edit::Unchanged,
    }
    let mut config = Some(config);
    splice_tree(tree, id, |node| match config.take() {
        Some(config) => vec![Arc::new(node.replace_config(config))],
        None => vec![Arc::clone(node)],
    })
}

/// Remove every node
pub fn clear(tree: &ComponentTree) -> Edit {
    if tree.is_empty() {
        Edit::Unchanged
    } else {
        Edit::Changed(ComponentTree::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnSpan, ComponentKind, Node};

    #[test]
    fn test_update_nested_config() {
        let child = Node::new(ComponentKind::Div, AttributeBag::new());
        let child_id = child.id.clone();
        let tree = ComponentTree::from_nodes(vec![Node::container(AttributeBag::new(), vec![child])]);

        let bag = AttributeBag::new()
            .with_background("#123456")
            .with_cols(ColumnSpan::clamped(3));
        let result = update_config(&tree, &child_id, bag.clone()).changed().unwrap();

        assert_eq!(result.find(&child_id).unwrap().config, bag);
        // the old snapshot still holds the old bag
        assert_eq!(tree.find(&child_id).unwrap().config, AttributeBag::new());
    }

    #[test]
    fn test_update_same_config_is_noop() {
        let node = Node::new(ComponentKind::Div, AttributeBag::new());
        let id = node.id.clone();
        let tree = ComponentTree::from_nodes(vec![node]);
        assert_eq!(update_config(&tree, &id, AttributeBag::new()), Edit::Unchanged);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let tree = ComponentTree::new();
        let edit = update_config(&tree, &NodeId::from("missing"), AttributeBag::new());
        assert_eq!(edit, Edit::Unchanged);
    }

    #[test]
    fn test_clear() {
        let tree = ComponentTree::from_nodes(vec![Node::new(ComponentKind::Div, AttributeBag::new())]);
        assert_eq!(clear(&tree), Edit::Changed(ComponentTree::new()));
        assert_eq!(clear(&ComponentTree::new()), Edit::Unchanged);
    }
}
