//! Linear undo/redo history of tree snapshots

use crate::tree::ComponentTree;

/// Snapshots of the tree with a movable cursor
///
/// Starts with a single empty tree. The cursor always points at a valid
/// entry; entries past it survive only until the next commit.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<ComponentTree>,
    cursor: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self {
            entries: vec![ComponentTree::new()],
            cursor: 0,
        }
    }
}

impl HistoryStack {
    /// Create a history holding one empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything past the cursor, append `tree` and move the cursor onto it
    pub fn commit(&mut self, tree: ComponentTree) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(tree);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry, returning it; None at the oldest entry
    pub fn undo(&mut self) -> Option<&ComponentTree> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry, returning it; None at the newest entry
    pub fn redo(&mut self) -> Option<&ComponentTree> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// The entry under the cursor
    pub fn current(&self) -> &ComponentTree {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries, including any past the cursor
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn entries(&self) -> &[ComponentTree] {
        &self.entries
    }
}
