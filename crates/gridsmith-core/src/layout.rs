use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::child::{ChildId, GridChild};
use crate::track::{PlaceItems, TrackSize};

pub const DEFAULT_ROW_COUNT: u32 = 3;
pub const DEFAULT_COLUMN_COUNT: u32 = 4;
pub const DEFAULT_GAP: f64 = 16.0;

/// Track layout and spacing of one grid container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridDefinition {
    pub row_count: u32,
    pub column_count: u32,
    pub row_sizes: Vec<TrackSize>,
    pub column_sizes: Vec<TrackSize>,
    /// Gaps in pixels.
    pub gap: f64,
    pub row_gap: f64,
    pub column_gap: f64,
    pub place_items: PlaceItems,
}

impl GridDefinition {
    pub fn new(row_count: u32, column_count: u32) -> Self {
        Self {
            row_count,
            column_count,
            row_sizes: vec![TrackSize::default(); row_count as usize],
            column_sizes: vec![TrackSize::default(); column_count as usize],
            gap: DEFAULT_GAP,
            row_gap: DEFAULT_GAP,
            column_gap: DEFAULT_GAP,
            place_items: PlaceItems::default(),
        }
    }

    /// Explicit row sizes, or `None` when they do not match `row_count`.
    pub fn explicit_row_sizes(&self) -> Option<&[TrackSize]> {
        (self.row_sizes.len() == self.row_count as usize).then_some(self.row_sizes.as_slice())
    }

    pub fn explicit_column_sizes(&self) -> Option<&[TrackSize]> {
        (self.column_sizes.len() == self.column_count as usize)
            .then_some(self.column_sizes.as_slice())
    }

    pub fn has_uniform_gap(&self) -> bool {
        self.row_gap == self.gap && self.column_gap == self.gap
    }

    /// Set all three gap values at once.
    pub fn set_gap(&mut self, gap: f64) {
        self.gap = gap;
        self.row_gap = gap;
        self.column_gap = gap;
    }
}

impl Default for GridDefinition {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_COUNT, DEFAULT_COLUMN_COUNT)
    }
}

/// One of the three responsive configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    /// Mobile-first cascade order.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    pub fn id(&self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "desktop" => Some(Breakpoint::Desktop),
            "tablet" => Some(Breakpoint::Tablet),
            "mobile" => Some(Breakpoint::Mobile),
            _ => None,
        }
    }

    /// `min-width` threshold in pixels.
    pub fn min_width(&self) -> u32 {
        match self {
            Breakpoint::Desktop => 1200,
            Breakpoint::Tablet => 768,
            Breakpoint::Mobile => 0,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Grid definition and children owned by a single breakpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointConfig {
    #[serde(default)]
    pub grid: GridDefinition,
    #[serde(default)]
    pub children: Vec<GridChild>,
}

impl BreakpointConfig {
    pub fn get_child(&self, id: &ChildId) -> Option<&GridChild> {
        self.children.iter().find(|c| c.id == *id)
    }

    pub fn get_child_mut(&mut self, id: &ChildId) -> Option<&mut GridChild> {
        self.children.iter_mut().find(|c| c.id == *id)
    }

    pub fn locked_children(&self) -> impl Iterator<Item = &GridChild> {
        self.children.iter().filter(|c| c.locked)
    }
}

/// The three breakpoint configurations.
///
/// Each sits behind an `Arc` so that cloning a whole layout (as history
/// snapshots do) shares untouched breakpoints; edits go through
/// [`Arc::make_mut`] and copy only the breakpoint they touch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakpoints {
    pub desktop: Arc<BreakpointConfig>,
    pub tablet: Arc<BreakpointConfig>,
    pub mobile: Arc<BreakpointConfig>,
}

impl Breakpoints {
    pub fn get(&self, breakpoint: Breakpoint) -> &BreakpointConfig {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }

    pub fn get_mut(&mut self, breakpoint: Breakpoint) -> &mut BreakpointConfig {
        let slot = match breakpoint {
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Mobile => &mut self.mobile,
        };
        Arc::make_mut(slot)
    }
}

/// The persisted, undo-tracked layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub active_breakpoint: Breakpoint,
    pub breakpoints: Breakpoints,
}

impl LayoutState {
    pub fn active(&self) -> &BreakpointConfig {
        self.breakpoints.get(self.active_breakpoint)
    }

    pub fn active_mut(&mut self) -> &mut BreakpointConfig {
        self.breakpoints.get_mut(self.active_breakpoint)
    }

    pub fn config(&self, breakpoint: Breakpoint) -> &BreakpointConfig {
        self.breakpoints.get(breakpoint)
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            active_breakpoint: Breakpoint::Desktop,
            breakpoints: Breakpoints::default(),
        }
    }
}

/// How children are placed in generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementStrategy {
    /// Explicit `grid-row` / `grid-column` line numbers.
    #[default]
    Lines,
    /// `grid-template-areas` plus `grid-area` per child.
    Areas,
}

impl PlacementStrategy {
    pub fn uses_areas(&self) -> bool {
        matches!(self, PlacementStrategy::Areas)
    }
}
