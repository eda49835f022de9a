use crate::content::Delta;

/// Undo/redo stacks of inverse deltas.
///
/// Each applied edit records its inverse on the undo stack. Undoing applies
/// that inverse and pushes the re-inverse onto the redo stack; a fresh edit
/// clears the redo stack.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Delta>,
    redo_stack: Vec<Delta>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the inverse of a freshly applied edit.
    pub fn record(&mut self, inverse: Delta) {
        self.undo_stack.push(inverse);
        self.redo_stack.clear();
    }

    /// Pop the next inverse to apply for undo. The caller applies it and
    /// hands the resulting inverse to `record_redo`.
    pub fn pop_undo(&mut self) -> Option<Delta> {
        self.undo_stack.pop()
    }

    pub fn record_redo(&mut self, inverse: Delta) {
        self.redo_stack.push(inverse);
    }

    pub fn pop_redo(&mut self) -> Option<Delta> {
        self.redo_stack.pop()
    }

    /// Push an undo entry without clearing the redo stack. Used when a redo
    /// is applied, so the redone edit can be undone again.
    pub fn record_undo(&mut self, inverse: Delta) {
        self.undo_stack.push(inverse);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
