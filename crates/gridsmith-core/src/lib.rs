//! # Gridsmith Core
//!
//! State engine behind the Gridsmith layout designer: selection geometry over
//! grid cells, the breakpoint-aware layout model, bounded snapshot undo/redo,
//! and the versioned JSON export envelope.
//!
//! Code generation lives in `gridsmith-codegen`; this crate never produces
//! CSS or HTML itself.

pub mod geometry;
pub mod track;
pub mod child;
pub mod layout;
pub mod config;
pub mod history;
pub mod session;
pub mod spatial;
pub mod export;
pub mod engine;

pub use child::{next_child_name, ChildId, GridChild};
pub use config::EngineConfig;
pub use engine::{EngineError, LayoutEngine};
pub use export::{ImportError, LayoutExport, EXPORT_VERSION};
pub use geometry::{
    cell_key, cell_key_set, expand_to_bounding_box, is_rectangular_selection,
    split_into_rectangles, CellKey, CellRect, GridCell,
};
pub use history::{HistoryEntry, SnapshotHistory};
pub use layout::{
    Breakpoint, BreakpointConfig, Breakpoints, GridDefinition, LayoutState, PlacementStrategy,
};
pub use session::InteractionSession;
pub use track::{PlaceItems, SelfAlignment, TrackSize};
