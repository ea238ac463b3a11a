//! Transient pointer-selection state, kept apart from the undo-tracked layout.

use crate::child::ChildId;
use crate::geometry::GridCell;

/// In-progress drag selection and the currently selected child.
///
/// Owned by the input surface and handed to engine calls that need it.
/// Nothing here is ever snapshotted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionSession {
    pending: Vec<GridCell>,
    selecting: bool,
    selected_child: Option<ChildId>,
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag with a single seed cell.
    pub fn start_selection(&mut self, cell: GridCell) {
        self.pending.clear();
        self.pending.push(cell);
        self.selecting = true;
    }

    /// Extend the drag. Repeated cells are ignored; order is otherwise kept.
    pub fn add_to_selection(&mut self, cell: GridCell) {
        if !self.pending.contains(&cell) {
            self.pending.push(cell);
        }
    }

    /// Abandon the drag without committing anything.
    pub fn clear_selection(&mut self) {
        self.pending.clear();
        self.selecting = false;
    }

    /// Drain the pending cells and end the drag.
    pub(crate) fn take_pending(&mut self) -> Vec<GridCell> {
        self.selecting = false;
        std::mem::take(&mut self.pending)
    }

    pub fn pending_cells(&self) -> &[GridCell] {
        &self.pending
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn select_child(&mut self, id: Option<ChildId>) {
        self.selected_child = id;
    }

    pub fn selected_child(&self) -> Option<ChildId> {
        self.selected_child
    }

    /// Drop both the drag and the selected child.
    pub fn reset(&mut self) {
        self.clear_selection();
        self.selected_child = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_is_idempotent_under_repeats() {
        let mut session = InteractionSession::new();
        session.start_selection(GridCell::new(0, 0));
        session.add_to_selection(GridCell::new(0, 1));
        session.add_to_selection(GridCell::new(0, 1));
        session.add_to_selection(GridCell::new(0, 0));
        assert!(session.is_selecting());
        assert_eq!(
            session.pending_cells(),
            &[GridCell::new(0, 0), GridCell::new(0, 1)]
        );
    }

    #[test]
    fn test_start_discards_previous_drag() {
        let mut session = InteractionSession::new();
        session.start_selection(GridCell::new(1, 1));
        session.add_to_selection(GridCell::new(2, 2));
        session.start_selection(GridCell::new(0, 0));
        assert_eq!(session.pending_cells(), &[GridCell::new(0, 0)]);
    }

    #[test]
    fn test_clear_selection() {
        let mut session = InteractionSession::new();
        session.start_selection(GridCell::new(1, 1));
        session.clear_selection();
        assert!(!session.is_selecting());
        assert!(session.pending_cells().is_empty());
    }
}
