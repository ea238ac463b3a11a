use thiserror::Error;

use crate::child::{next_child_name, ChildId, GridChild};
use crate::config::EngineConfig;
use crate::export::{ImportError, LayoutExport};
use crate::geometry::{expand_to_bounding_box, CellRect};
use crate::history::SnapshotHistory;
use crate::layout::{Breakpoint, BreakpointConfig, GridDefinition, LayoutState, PlacementStrategy};
use crate::session::InteractionSession;
use crate::spatial::LockIndex;
use crate::track::TrackSize;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Selection is empty")]
    EmptySelection,

    #[error("Selection overlaps locked child '{name}'")]
    LockedOverlap { child: ChildId, name: String },

    #[error("Child {0} not found in the active breakpoint")]
    ChildNotFound(ChildId),

    #[error("Failed to serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Rows,
    Columns,
}

impl Axis {
    fn label(&self) -> &'static str {
        match self {
            Axis::Rows => "Resize rows",
            Axis::Columns => "Resize columns",
        }
    }
}

/// Owner of the authoritative [`LayoutState`] and its undo/redo history.
///
/// Operations that push history: [`resize_rows`](Self::resize_rows),
/// [`resize_columns`](Self::resize_columns),
/// [`end_selection`](Self::end_selection) and
/// [`delete_child`](Self::delete_child).
///
/// [`mutate_grid_definition`](Self::mutate_grid_definition) and
/// [`update_child`](Self::update_child) deliberately do not, so that live
/// property edits (typing a name, nudging a gap) do not flood the undo stack.
/// Callers that want an undo point call
/// [`record_snapshot`](Self::record_snapshot) first.
#[derive(Debug)]
pub struct LayoutEngine {
    state: LayoutState,
    history: SnapshotHistory,
    placement: PlacementStrategy,
    config: EngineConfig,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: LayoutState::default(),
            history: SnapshotHistory::new(config.history_limit),
            placement: PlacementStrategy::default(),
            config,
        }
    }

    /// Start from an existing layout with empty history.
    pub fn with_state(state: LayoutState) -> Self {
        Self {
            state,
            ..Self::new()
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn active_breakpoint(&self) -> Breakpoint {
        self.state.active_breakpoint
    }

    pub fn active_config(&self) -> &BreakpointConfig {
        self.state.active()
    }

    pub fn grid(&self) -> &GridDefinition {
        &self.state.active().grid
    }

    pub fn children(&self) -> &[GridChild] {
        &self.state.active().children
    }

    pub fn find_child(&self, id: &ChildId) -> Option<&GridChild> {
        self.state.active().get_child(id)
    }

    pub fn placement(&self) -> PlacementStrategy {
        self.placement
    }

    /// Not undo-tracked.
    pub fn set_placement_strategy(&mut self, placement: PlacementStrategy) {
        self.placement = placement;
    }

    // ── Breakpoints ──────────────────────────────────────────────────

    /// Switch breakpoints. Selection context never carries across, and the
    /// switch itself is a view change with no history entry.
    pub fn set_active_breakpoint(
        &mut self,
        breakpoint: Breakpoint,
        session: &mut InteractionSession,
    ) {
        self.state.active_breakpoint = breakpoint;
        session.reset();
        log::debug!("Active breakpoint: {}", breakpoint);
    }

    // ── Grid ─────────────────────────────────────────────────────────

    /// Add or remove rows, clamped to the configured track bounds.
    ///
    /// Every effective resize pushes one snapshot and clears redo. A request
    /// that clamps to the current count is a no-op: it returns `false` and
    /// leaves both history stacks alone, so repeated presses at a bound do
    /// not fill the undo stack with identical states.
    pub fn resize_rows(&mut self, delta: i32) -> bool {
        self.resize_tracks(Axis::Rows, delta)
    }

    /// Add or remove columns. Same history rules as [`Self::resize_rows`].
    pub fn resize_columns(&mut self, delta: i32) -> bool {
        self.resize_tracks(Axis::Columns, delta)
    }

    fn resize_tracks(&mut self, axis: Axis, delta: i32) -> bool {
        let grid = &self.state.active().grid;
        let current = match axis {
            Axis::Rows => grid.row_count,
            Axis::Columns => grid.column_count,
        };
        let target = self.config.clamp_tracks(current as i64 + delta as i64);
        if target == current {
            log::debug!("{}: already at {} tracks", axis.label(), current);
            return false;
        }

        self.history.record(&self.state, axis.label());

        let grid = &mut self.state.active_mut().grid;
        let (count, sizes) = match axis {
            Axis::Rows => (&mut grid.row_count, &mut grid.row_sizes),
            Axis::Columns => (&mut grid.column_count, &mut grid.column_sizes),
        };
        *count = target;
        sizes.resize(target as usize, TrackSize::default());

        log::debug!("{}: {} -> {}", axis.label(), current, target);
        true
    }

    /// Apply an arbitrary edit to the active grid definition. No history entry.
    pub fn mutate_grid_definition(&mut self, updater: impl FnOnce(&mut GridDefinition)) {
        updater(&mut self.state.active_mut().grid);
    }

    /// Push the current state onto the undo stack as an explicit undo point.
    pub fn record_snapshot(&mut self, label: &str) {
        self.history.record(&self.state, label);
    }

    // ── Selection ────────────────────────────────────────────────────

    /// Commit the session's drag selection as a new child.
    ///
    /// The pending cells are expanded to their bounding box. The commit is
    /// rejected, leaving layout and history untouched, when the box touches a
    /// locked child. The session's drag is cleared in every case.
    pub fn end_selection(
        &mut self,
        session: &mut InteractionSession,
    ) -> Result<ChildId, EngineError> {
        let cells = expand_to_bounding_box(&session.take_pending());
        let bounds = CellRect::from_cells(&cells).ok_or(EngineError::EmptySelection)?;

        let config = self.state.active();
        if let Some(locked_id) = LockIndex::build(&config.children).first_conflict(&bounds) {
            let name = config
                .get_child(&locked_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();
            log::warn!("Selection {:?} rejected: overlaps locked child '{}'", bounds, name);
            return Err(EngineError::LockedOverlap {
                child: locked_id,
                name,
            });
        }

        let name = next_child_name(&config.children);
        self.history.record(&self.state, "Add child");

        let child = GridChild::new(&name, cells);
        let id = child.id;
        log::debug!("Added child '{}' covering {:?}", name, bounds);
        self.state.active_mut().children.push(child);
        Ok(id)
    }

    // ── Children ─────────────────────────────────────────────────────

    pub fn delete_child(
        &mut self,
        id: &ChildId,
        session: &mut InteractionSession,
    ) -> Result<GridChild, EngineError> {
        let index = self
            .state
            .active()
            .children
            .iter()
            .position(|c| c.id == *id)
            .ok_or(EngineError::ChildNotFound(*id))?;

        self.history.record(&self.state, "Delete child");
        let removed = self.state.active_mut().children.remove(index);
        if session.selected_child() == Some(*id) {
            session.select_child(None);
        }

        log::debug!("Deleted child '{}'", removed.name);
        Ok(removed)
    }

    /// Apply an arbitrary edit to one child of the active breakpoint. No history entry.
    pub fn update_child(
        &mut self,
        id: &ChildId,
        updater: impl FnOnce(&mut GridChild),
    ) -> Result<(), EngineError> {
        if self.state.active().get_child(id).is_none() {
            return Err(EngineError::ChildNotFound(*id));
        }
        if let Some(child) = self.state.active_mut().get_child_mut(id) {
            updater(child);
        }
        Ok(())
    }

    pub fn rename_child(&mut self, id: &ChildId, name: &str) -> Result<(), EngineError> {
        self.update_child(id, |c| c.name = name.to_string())
    }

    pub fn set_child_locked(&mut self, id: &ChildId, locked: bool) -> Result<(), EngineError> {
        self.update_child(id, |c| c.locked = locked)
    }

    pub fn set_child_area_name(
        &mut self,
        id: &ChildId,
        area_name: Option<&str>,
    ) -> Result<(), EngineError> {
        self.update_child(id, |c| c.area_name = area_name.map(str::to_string))
    }

    // ── Undo / Redo ──────────────────────────────────────────────────

    /// Restore the previous snapshot and clear the selected child.
    pub fn undo(&mut self, session: &mut InteractionSession) -> bool {
        let undone = self.history.undo(&mut self.state);
        if undone {
            session.select_child(None);
            log::debug!("Undo ({} left)", self.history.undo_depth());
        }
        undone
    }

    /// Re-apply the most recently undone edit. Selection is left alone.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.state);
        if redone {
            log::debug!("Redo ({} left)", self.history.redo_depth());
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    // ── Import / Export ──────────────────────────────────────────────

    /// Serialize the current layout as a pretty-printed, versioned envelope.
    pub fn export_layout(&self) -> Result<String, EngineError> {
        Ok(LayoutExport::new(self.state.clone()).to_json()?)
    }

    /// Replace the layout wholesale from an exported envelope.
    ///
    /// On any failure the current layout, history and session are untouched.
    /// On success both history stacks and the selected child are cleared.
    pub fn import_layout(
        &mut self,
        json: &str,
        session: &mut InteractionSession,
    ) -> Result<(), ImportError> {
        let export = LayoutExport::from_json(json)
            .and_then(|export| export.check_track_counts(&self.config).map(|()| export))
            .map_err(|e| {
                log::warn!("Rejected layout import: {}", e);
                e
            })?;

        self.state = export.layout;
        self.history.clear();
        session.select_child(None);

        log::info!(
            "Imported layout (exported at {}), active breakpoint {}",
            export.exported_at,
            self.state.active_breakpoint
        );
        Ok(())
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
