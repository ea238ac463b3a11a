use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::layout::LayoutState;

/// A stored layout snapshot for the undo/redo stacks.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub state: LayoutState,
    /// Human-readable description of the edit this entry reverts.
    pub label: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(state: LayoutState, label: &str) -> Self {
        Self {
            state,
            label: label.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded two-stack snapshot history.
///
/// Snapshots are owned clones of [`LayoutState`]. Edits to the live state go
/// through copy-on-write, so a stored snapshot never observes later changes.
#[derive(Debug)]
pub struct SnapshotHistory {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    limit: usize,
}

impl SnapshotHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record the pre-edit state. A new edit invalidates the redo stack.
    pub fn record(&mut self, state: &LayoutState, label: &str) {
        self.undo_stack.push_back(HistoryEntry::new(state.clone(), label));
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Swap `current` with the most recent undo snapshot.
    pub fn undo(&mut self, current: &mut LayoutState) -> bool {
        let Some(entry) = self.undo_stack.pop_back() else {
            return false;
        };
        let previous = std::mem::replace(current, entry.state);
        self.redo_stack.push(HistoryEntry::new(previous, &entry.label));
        true
    }

    /// Swap `current` with the most recent redo snapshot.
    pub fn redo(&mut self, current: &mut LayoutState) -> bool {
        let Some(entry) = self.redo_stack.pop() else {
            return false;
        };
        let previous = std::mem::replace(current, entry.state);
        self.undo_stack.push_back(HistoryEntry::new(previous, &entry.label));
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|e| e.label.as_str())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.label.as_str())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(crate::config::EngineConfig::default().history_limit)
    }
}
