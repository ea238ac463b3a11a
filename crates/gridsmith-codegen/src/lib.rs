//! # Gridsmith Codegen
//!
//! Deterministic CSS Grid and HTML generation for Gridsmith layouts.
//!
//! Every generator is a pure function of the layout it is given: no caching,
//! no I/O, and no failure path. Inputs that cannot be rendered faithfully
//! (unknown track sizes, blank area names, track lists that disagree with the
//! track count) are replaced by safe defaults so the output is always
//! well-formed.

pub mod naming;
pub mod css;
pub mod areas;
pub mod html;
pub mod responsive;

pub use areas::{generate_child_css_area, generate_parent_grid_css_with_areas, generate_template_areas};
pub use css::{
    format_track_size, generate_child_css, generate_full_css, generate_parent_grid_css,
    get_child_placement, ChildPlacement,
};
pub use html::generate_html;
pub use naming::to_class_name;
pub use responsive::generate_responsive_css;

use gridsmith_core::{LayoutState, PlacementStrategy};
use serde::{Deserialize, Serialize};

/// Class of the generated grid container.
pub const DEFAULT_PARENT_CLASS: &str = "grid-container";

/// Output settings shared by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenOptions {
    pub parent_class: String,
    pub placement: PlacementStrategy,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            parent_class: DEFAULT_PARENT_CLASS.to_string(),
            placement: PlacementStrategy::default(),
        }
    }
}

impl CodegenOptions {
    pub fn with_placement(mut self, placement: PlacementStrategy) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_parent_class(mut self, parent_class: &str) -> Self {
        self.parent_class = parent_class.to_string();
        self
    }

    /// Stylesheet for the active breakpoint.
    pub fn css(&self, state: &LayoutState) -> String {
        generate_full_css(state.active(), self.placement, &self.parent_class)
    }

    /// Markup skeleton for the active breakpoint.
    pub fn html(&self, state: &LayoutState) -> String {
        generate_html(&state.active().children, &self.parent_class)
    }

    /// Mobile-first stylesheet for all breakpoints.
    pub fn responsive_css(&self, state: &LayoutState) -> String {
        generate_responsive_css(state, self.placement, &self.parent_class)
    }
}
