//! Tree-producing edit operations
//!
//! Every operation takes the current tree and returns an [`Edit`]: either a
//! new tree, or `Unchanged` when the edit does not apply (unknown id, leaf
//! parent, identical config). Nothing reachable from the input tree is ever
//! mutated; only the nodes on the path from a root to the edited node are
//! rebuilt, all other subtrees are shared.

pub mod drop;
pub mod duplicate;
pub mod insert;
pub mod normalize;
pub mod remove;
pub mod update;

pub use drop::{resolve_drop_index, resolve_insert_index};
pub use duplicate::duplicate;
pub use insert::insert;
pub use normalize::{even_span, normalize};
pub use remove::remove;
pub use update::{clear, update_config};

use std::sync::Arc;

use crate::model::{NodeId, NodeRef};
use crate::tree::ComponentTree;

/// Result of an edit operation
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Edit {
    /// The edit applied and produced this tree
    Changed(ComponentTree),
    /// The edit did not apply; the input tree stands
    Unchanged,
}

impl Edit {
    pub fn is_changed(&self) -> bool {
        matches!(self, Edit::Changed(_))
    }

    /// The new tree, if the edit applied
    pub fn changed(self) -> Option<ComponentTree> {
        match self {
            Edit::Changed(tree) => Some(tree),
            Edit::Unchanged => None,
        }
    }

    /// The resulting tree, falling back to `original` when nothing changed
    pub fn into_tree(self, original: &ComponentTree) -> ComponentTree {
        self.changed().unwrap_or_else(|| original.clone())
    }
}

impl From<Option<ComponentTree>> for Edit {
    fn from(tree: Option<ComponentTree>) -> Self {
        tree.map_or(Edit::Unchanged, Edit::Changed)
    }
}

/// Replace the node with `id` by whatever `replace` returns, path-copying its ancestors
///
/// Returns None if `id` does not occur in `nodes`.
pub(crate) fn splice<F>(nodes: &[NodeRef], id: &NodeId, replace: &mut F) -> Option<Vec<NodeRef>>
where
    F: FnMut(&NodeRef) -> Vec<NodeRef>,
{
    for (index, node) in nodes.iter().enumerate() {
        if &node.id == id {
            let mut spliced = Vec::with_capacity(nodes.len() + 1);
            spliced.extend(nodes[..index].iter().cloned());
            spliced.extend(replace(node));
            spliced.extend(nodes[index + 1..].iter().cloned());
            return Some(spliced);
        }
        if let Some(children) = splice(&node.children, id, replace) {
            let mut copied = nodes.to_vec();
            copied[index] = Arc::new(node.replace_children(children));
            return Some(copied);
        }
    }
    None
}

/// Apply [`splice`] to the root sequence of `tree`
pub(crate) fn splice_tree<F>(tree: &ComponentTree, id: &NodeId, mut replace: F) -> Edit
where
    F: FnMut(&NodeRef) -> Vec<NodeRef>,
{
    splice(tree.roots(), id, &mut replace)
        .map(ComponentTree::from_roots)
        .into()
}
