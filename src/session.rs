//! An editing session: current tree, history, selection and default style
//!
//! The current tree is always the history entry under the cursor, so the two
//! cannot drift apart. Every edit that changes the tree commits exactly once.

use tracing::{debug, trace};

use crate::defaults::{PreferenceError, StylePreference};
use crate::edit::{self, Edit};
use crate::geometry::GeometryProvider;
use crate::history::HistoryStack;
use crate::model::{AttributeBag, ComponentKind, Node, NodeId};
use crate::tree::ComponentTree;

/// State of one editing session
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: HistoryStack,
    selection: Option<NodeId>,
    preference: StylePreference,
}

impl Session {
    /// Start a session with an empty canvas
    pub fn new(preference: StylePreference) -> Self {
        Self {
            history: HistoryStack::new(),
            selection: None,
            preference,
        }
    }

    /// Start a session whose first committed state is `tree`
    pub fn with_tree(preference: StylePreference, tree: ComponentTree) -> Self {
        let mut session = Self::new(preference);
        if !tree.is_empty() {
            session.history.commit(tree);
        }
        session
    }

    /// The current tree
    pub fn tree(&self) -> &ComponentTree {
        self.history.current()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn selection(&self) -> Option<&NodeId> {
        self.selection.as_ref()
    }

    /// Attribute bag used for newly dropped nodes
    pub fn default_config(&self) -> &AttributeBag {
        self.preference.style()
    }

    /// Replace the default style, persisting it if the preference is file-backed
    pub fn set_default_config(&mut self, config: AttributeBag) -> Result<(), PreferenceError> {
        self.preference.set(config)
    }

    /// Drop a new component under `parent` (root level when None) at `pointer_x`
    ///
    /// Returns the id of the new node, or None when the drop target does not
    /// exist or cannot hold children.
    pub fn drop_component(
        &mut self,
        kind: ComponentKind,
        parent: Option<&NodeId>,
        pointer_x: f64,
        geometry: &dyn GeometryProvider,
    ) -> Option<NodeId> {
        let node = Node::new(kind, self.preference.style().for_new_node());
        let id = node.id.clone();
        let edit = edit::insert(self.tree(), parent, node, pointer_x, geometry);
        self.apply("insert", edit).then_some(id)
    }

    /// Remove a node and its subtree; clears the selection if it was inside
    pub fn remove(&mut self, id: &NodeId) -> bool {
        let edit = edit::remove(self.tree(), id);
        let changed = self.apply("remove", edit);
        if changed {
            self.prune_selection();
        }
        changed
    }

    /// Duplicate a node, returning the id of the copy
    pub fn duplicate(&mut self, id: &NodeId) -> Option<NodeId> {
        let edit = edit::duplicate(self.tree(), id);
        if !self.apply("duplicate", edit) {
            return None;
        }
        let location = self.tree().locate(id)?;
        let siblings = match location.parent() {
            Some(parent) => parent.children.as_slice(),
            None => self.tree().roots(),
        };
        siblings.get(location.index() + 1).map(|copy| copy.id.clone())
    }

    /// Duplicate the selected node
    pub fn duplicate_selected(&mut self) -> Option<NodeId> {
        let id = self.selection.clone()?;
        self.duplicate(&id)
    }

    /// Replace the attribute bag of a node
    pub fn update_config(&mut self, id: &NodeId, config: AttributeBag) -> bool {
        let edit = edit::update_config(self.tree(), id, config);
        self.apply("update-config", edit)
    }

    /// Replace the attribute bag of the selected node
    pub fn update_selected(&mut self, config: AttributeBag) -> bool {
        match self.selection.clone() {
            Some(id) => self.update_config(&id, config),
            None => false,
        }
    }

    /// Remove every node
    pub fn clear(&mut self) -> bool {
        let edit = edit::clear(self.tree());
        let changed = self.apply("clear", edit);
        if changed {
            self.selection = None;
        }
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back to the previous snapshot
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            trace!("nothing to undo");
            return false;
        }
        debug!(cursor = self.history.cursor(), "undo");
        self.prune_selection();
        true
    }

    /// Step forward to the next snapshot
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            trace!("nothing to redo");
            return false;
        }
        debug!(cursor = self.history.cursor(), "redo");
        self.prune_selection();
        true
    }

    /// Select a node, returning its attribute bag for editing
    pub fn select(&mut self, id: &NodeId) -> Option<&AttributeBag> {
        if !self.tree().contains(id) {
            return None;
        }
        self.selection = Some(id.clone());
        self.tree().find(id).map(|node| &node.config)
    }

    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Attribute bag of the selected node
    pub fn selected_config(&self) -> Option<&AttributeBag> {
        let id = self.selection.as_ref()?;
        self.tree().find(id).map(|node| &node.config)
    }

    fn apply(&mut self, operation: &str, edit: Edit) -> bool {
        match edit {
            Edit::Changed(tree) => {
                debug!(
                    operation,
                    nodes = tree.node_count(),
                    entry = self.history.cursor() + 1,
                    "commit"
                );
                self.history.commit(tree);
                true
            }
            Edit::Unchanged => {
                trace!(operation, "no-op");
                false
            }
        }
    }

    fn prune_selection(&mut self) {
        if let Some(id) = &self.selection {
            if !self.history.current().contains(id) {
                debug!(id = %id, "selection no longer in tree");
                self.selection = None;
            }
        }
    }
}
