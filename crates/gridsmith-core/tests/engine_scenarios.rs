//! End-to-end scenarios for the layout engine: selection commits, locking,
//! resizing, undo/redo and export/import.

use gridsmith_core::{
    Breakpoint, CellRect, ChildId, EngineConfig, EngineError, GridCell, ImportError,
    InteractionSession, LayoutEngine, LayoutExport, LayoutState, TrackSize,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Drive a full pointer drag through the session and commit it.
fn drag(
    engine: &mut LayoutEngine,
    session: &mut InteractionSession,
    cells: &[(u32, u32)],
) -> Result<ChildId, EngineError> {
    let mut iter = cells.iter().copied().map(GridCell::from);
    if let Some(first) = iter.next() {
        session.start_selection(first);
    }
    for cell in iter {
        session.add_to_selection(cell);
    }
    engine.end_selection(session)
}

#[test]
fn commit_square_selection_on_default_grid() {
    init_logging();
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    assert_eq!(engine.grid().row_count, 3);
    assert_eq!(engine.grid().column_count, 4);

    let id = drag(&mut engine, &mut session, &[(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();

    let children = engine.children();
    assert_eq!(children.len(), 1);
    let child = &children[0];
    assert_eq!(child.id, id);
    assert_eq!(child.name, "child1");
    assert!(!child.locked);
    assert_eq!(child.cells, CellRect::new(0, 1, 0, 1).cells());
    assert!(!session.is_selecting());
    assert!(session.pending_cells().is_empty());
}

#[test]
fn non_contiguous_selection_is_expanded() {
    init_logging();
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();

    drag(&mut engine, &mut session, &[(0, 0), (0, 2)]).unwrap();

    assert_eq!(
        engine.children()[0].cells,
        vec![GridCell::new(0, 0), GridCell::new(0, 1), GridCell::new(0, 2)]
    );
}

#[test]
fn selection_over_locked_child_is_rejected() {
    init_logging();
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();

    let locked = drag(&mut engine, &mut session, &[(0, 0), (1, 1)]).unwrap();
    engine.set_child_locked(&locked, true).unwrap();
    let depth = engine.undo_depth();

    let err = drag(&mut engine, &mut session, &[(1, 1), (2, 3)]).unwrap_err();
    match err {
        EngineError::LockedOverlap { child, name } => {
            assert_eq!(child, locked);
            assert_eq!(name, "child1");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(engine.children().len(), 1);
    assert_eq!(engine.undo_depth(), depth);
    assert!(!session.is_selecting());
    assert!(session.pending_cells().is_empty());

    // A box beside the locked child is still accepted.
    drag(&mut engine, &mut session, &[(0, 2), (2, 3)]).unwrap();
    assert_eq!(engine.children().len(), 2);
}

#[test]
fn unlocked_children_may_overlap() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    drag(&mut engine, &mut session, &[(0, 0), (1, 1)]).unwrap();
    drag(&mut engine, &mut session, &[(1, 1), (2, 2)]).unwrap();
    assert_eq!(engine.children().len(), 2);
}

#[test]
fn resize_rows_clamps_to_bounds() {
    init_logging();
    let mut engine = LayoutEngine::new();

    assert!(engine.resize_rows(17));
    assert_eq!(engine.grid().row_count, 20);
    assert_eq!(engine.grid().row_sizes.len(), 20);

    assert!(!engine.resize_rows(1));
    assert_eq!(engine.grid().row_count, 20);
    assert_eq!(engine.grid().row_sizes.len(), 20);

    assert!(engine.resize_rows(-25));
    assert_eq!(engine.grid().row_count, 1);
    assert_eq!(engine.grid().row_sizes, vec![TrackSize::fr(1.0)]);
}

#[test]
fn custom_config_bounds_resizing() {
    let config = EngineConfig::from_json(r#"{"maxTracks": 6, "historyLimit": 2}"#).unwrap();
    let mut engine = LayoutEngine::with_config(config);
    engine.resize_columns(10);
    assert_eq!(engine.grid().column_count, 6);

    engine.resize_columns(-1);
    engine.resize_columns(-1);
    assert_eq!(engine.undo_depth(), 2);
}

#[test]
fn undo_redo_round_trip() {
    init_logging();
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();

    let before = engine.state().clone();
    let id = drag(&mut engine, &mut session, &[(2, 2)]).unwrap();
    let after = engine.state().clone();
    session.select_child(Some(id));

    assert!(engine.undo(&mut session));
    assert_eq!(engine.state(), &before);
    assert_eq!(session.selected_child(), None);
    assert_eq!(engine.redo_description(), Some("Add child"));

    assert!(engine.redo());
    assert_eq!(engine.state(), &after);
    assert!(!engine.can_redo());
}

#[test]
fn redo_keeps_selection() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    let id = drag(&mut engine, &mut session, &[(0, 0)]).unwrap();
    engine.undo(&mut session);
    session.select_child(Some(id));
    engine.redo();
    assert_eq!(session.selected_child(), Some(id));
}

#[test]
fn fresh_edit_after_undo_clears_redo() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();

    engine.resize_columns(1);
    engine.undo(&mut session);
    assert!(engine.can_redo());

    engine.resize_rows(1);
    assert!(!engine.can_redo());
    assert!(!engine.redo());
}

#[test]
fn undo_on_empty_history_is_noop() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    let before = engine.state().clone();
    assert!(!engine.undo(&mut session));
    assert_eq!(engine.state(), &before);
}

#[test]
fn snapshots_survive_later_edits() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();

    let id = drag(&mut engine, &mut session, &[(0, 0)]).unwrap();
    engine.record_snapshot("Rename");
    engine.rename_child(&id, "hero").unwrap();
    engine.mutate_grid_definition(|g| g.place_items = gridsmith_core::PlaceItems::Center);

    assert!(engine.undo(&mut session));
    assert_eq!(engine.children()[0].name, "child1");
    assert_eq!(engine.grid().place_items, gridsmith_core::PlaceItems::Stretch);
}

#[test]
fn history_is_bounded() {
    let mut engine = LayoutEngine::new();
    for _ in 0..30 {
        engine.resize_rows(1);
        engine.resize_rows(-1);
    }
    assert_eq!(engine.undo_depth(), 50);
}

#[test]
fn delete_child_clears_selection_and_is_undoable() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    let id = drag(&mut engine, &mut session, &[(0, 0), (0, 3)]).unwrap();
    session.select_child(Some(id));

    let removed = engine.delete_child(&id, &mut session).unwrap();
    assert_eq!(removed.name, "child1");
    assert!(engine.children().is_empty());
    assert_eq!(session.selected_child(), None);

    assert!(matches!(
        engine.delete_child(&id, &mut session),
        Err(EngineError::ChildNotFound(_))
    ));

    engine.undo(&mut session);
    assert_eq!(engine.children().len(), 1);
}

#[test]
fn breakpoint_switch_isolates_children() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    let id = drag(&mut engine, &mut session, &[(0, 0)]).unwrap();
    session.select_child(Some(id));

    engine.set_active_breakpoint(Breakpoint::Tablet, &mut session);
    assert_eq!(session.selected_child(), None);
    assert!(engine.children().is_empty());
    assert!(!engine.can_redo());

    drag(&mut engine, &mut session, &[(1, 1)]).unwrap();
    assert_eq!(engine.children()[0].name, "child1");
    assert_eq!(engine.state().config(Breakpoint::Desktop).children.len(), 1);
    assert_eq!(engine.state().config(Breakpoint::Mobile).children.len(), 0);
}

#[test]
fn export_import_round_trip() {
    init_logging();
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    let id = drag(&mut engine, &mut session, &[(0, 0), (1, 2)]).unwrap();
    engine.update_child(&id, |c| c.area_name = Some("hero".into())).unwrap();
    engine.mutate_grid_definition(|g| g.row_sizes[1] = TrackSize::minmax("100px", "1fr"));
    engine.set_active_breakpoint(Breakpoint::Mobile, &mut session);
    engine.resize_columns(-3);

    let exported = engine.export_layout().unwrap();
    let snapshot = engine.state().clone();

    let mut restored = LayoutEngine::new();
    let mut other_session = InteractionSession::new();
    other_session.select_child(Some(id));
    restored.resize_rows(1);
    restored.import_layout(&exported, &mut other_session).unwrap();

    assert_eq!(restored.state(), &snapshot);
    assert!(!restored.can_undo());
    assert!(!restored.can_redo());
    assert_eq!(other_session.selected_child(), None);
}

#[test]
fn rejected_import_leaves_state_untouched() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    let id = drag(&mut engine, &mut session, &[(0, 0)]).unwrap();
    session.select_child(Some(id));
    let before = engine.state().clone();

    let mut wrong_version: serde_json::Value =
        serde_json::from_str(&engine.export_layout().unwrap()).unwrap();
    wrong_version["version"] = serde_json::json!(2);
    let wrong_version = wrong_version.to_string();

    let cases: [&str; 4] = [
        "{ not json",
        wrong_version.as_str(),
        r#"{"version":1,"layout":{"activeBreakpoint":"desktop"}}"#,
        r#"{"version":1,"layout":{"activeBreakpoint":"tv","breakpoints":{}}}"#,
    ];
    for case in cases {
        assert!(engine.import_layout(case, &mut session).is_err(), "accepted: {case}");
    }

    assert_eq!(engine.state(), &before);
    assert!(engine.can_undo());
    assert_eq!(session.selected_child(), Some(id));
}

#[test]
fn import_error_kinds() {
    let mut engine = LayoutEngine::new();
    let mut session = InteractionSession::new();
    assert!(matches!(
        engine.import_layout(r#"{"layout":{}}"#, &mut session),
        Err(ImportError::UnsupportedVersion(_))
    ));
    assert!(matches!(
        engine.import_layout(r#"{"version":1}"#, &mut session),
        Err(ImportError::MissingLayout)
    ));
}

#[test]
fn export_envelope_is_versioned() {
    let engine = LayoutEngine::with_state(LayoutState::default());
    let export = LayoutExport::from_json(&engine.export_layout().unwrap()).unwrap();
    assert_eq!(export.version, 1);
    assert_eq!(export.layout, LayoutState::default());
    assert!(!export.exported_at.is_empty());
}
