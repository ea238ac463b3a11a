//! Line-based CSS generation: explicit `grid-row` / `grid-column` placement.

use gridsmith_core::{
    BreakpointConfig, CellRect, GridCell, GridChild, GridDefinition, PlaceItems,
    PlacementStrategy, TrackSize,
};

use crate::areas::{generate_child_css_area, generate_parent_grid_css_with_areas};
use crate::naming::to_class_name;

/// Track value substituted for anything that cannot be rendered.
pub const FALLBACK_TRACK: &str = "1fr";

/// A single CSS rule under construction.
#[derive(Debug, Clone)]
pub(crate) struct CssRule {
    selector: String,
    declarations: Vec<(&'static str, String)>,
}

impl CssRule {
    pub(crate) fn class(name: &str) -> Self {
        Self {
            selector: format!(".{}", name),
            declarations: Vec::new(),
        }
    }

    pub(crate) fn declare(&mut self, property: &'static str, value: impl Into<String>) -> &mut Self {
        self.declarations.push((property, value.into()));
        self
    }

    pub(crate) fn finish(&self) -> String {
        let mut out = format!("{} {{\n", self.selector);
        for (property, value) in &self.declarations {
            let separator = if value.starts_with('\n') { "" } else { " " };
            out.push_str(&format!("  {}:{}{};\n", property, separator, value));
        }
        out.push('}');
        out
    }
}

/// Line coordinates for one child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildPlacement {
    pub row: String,
    pub column: String,
}

pub fn format_track_size(size: &TrackSize) -> String {
    match size {
        TrackSize::Fr { value } if value.is_finite() => format!("{}fr", value),
        TrackSize::Px { value } if value.is_finite() => format!("{}px", value),
        TrackSize::Percent { value } if value.is_finite() => format!("{}%", value),
        TrackSize::Auto => "auto".to_string(),
        TrackSize::Minmax { min, max } if !min.trim().is_empty() && !max.trim().is_empty() => {
            format!("minmax({}, {})", min.trim(), max.trim())
        }
        _ => FALLBACK_TRACK.to_string(),
    }
}

/// 1-based grid lines covering the bounding box of `cells`.
///
/// A span of one track renders as the bare start line (`"2"`); longer spans
/// render as `"start / end"`. No cells means `auto` on both axes.
pub fn get_child_placement(cells: &[GridCell]) -> ChildPlacement {
    match CellRect::from_cells(cells) {
        Some(rect) => ChildPlacement {
            row: line_range(rect.row_start, rect.row_span()),
            column: line_range(rect.column_start, rect.column_span()),
        },
        None => ChildPlacement {
            row: "auto".to_string(),
            column: "auto".to_string(),
        },
    }
}

fn line_range(start: u32, span: u64) -> String {
    let first = u64::from(start) + 1;
    if span == 1 {
        first.to_string()
    } else {
        format!("{} / {}", first, first + span)
    }
}

fn track_list(explicit: Option<&[TrackSize]>, count: u32) -> String {
    match explicit {
        Some(sizes) if !sizes.is_empty() => sizes
            .iter()
            .map(format_track_size)
            .collect::<Vec<_>>()
            .join(" "),
        _ => format!("repeat({}, {})", count.max(1), FALLBACK_TRACK),
    }
}

fn px(value: f64) -> String {
    if value.is_finite() {
        format!("{}px", value)
    } else {
        "0px".to_string()
    }
}

/// Container rule shared by both placement strategies. `areas` is the
/// serialized `grid-template-areas` block, if any.
pub(crate) fn parent_rule(grid: &GridDefinition, parent_class: &str, areas: Option<&str>) -> CssRule {
    let mut rule = CssRule::class(parent_class);
    rule.declare("display", "grid");

    if let Some(areas) = areas.filter(|a| !a.is_empty()) {
        let indented: Vec<String> = areas.lines().map(|line| format!("    {}", line)).collect();
        rule.declare("grid-template-areas", format!("\n{}", indented.join("\n")));
    }

    rule.declare(
        "grid-template-rows",
        track_list(grid.explicit_row_sizes(), grid.row_count),
    );
    rule.declare(
        "grid-template-columns",
        track_list(grid.explicit_column_sizes(), grid.column_count),
    );

    if grid.has_uniform_gap() {
        rule.declare("gap", px(grid.gap));
    } else {
        rule.declare("row-gap", px(grid.row_gap));
        rule.declare("column-gap", px(grid.column_gap));
    }

    if grid.place_items != PlaceItems::Stretch {
        rule.declare("place-items", grid.place_items.as_css());
    }
    rule
}

pub(crate) fn declare_self_alignment(rule: &mut CssRule, child: &GridChild) {
    if let Some(justify) = child.justify_self {
        rule.declare("justify-self", justify.as_css());
    }
    if let Some(align) = child.align_self {
        rule.declare("align-self", align.as_css());
    }
}

pub(crate) fn child_class(child: &GridChild, class_override: Option<&str>) -> String {
    class_override
        .map(str::to_string)
        .unwrap_or_else(|| to_class_name(&child.name))
}

pub fn generate_parent_grid_css(grid: &GridDefinition, parent_class: &str) -> String {
    parent_rule(grid, parent_class, None).finish()
}

pub fn generate_child_css(child: &GridChild, class_override: Option<&str>) -> String {
    let placement = get_child_placement(&child.cells);
    let mut rule = CssRule::class(&child_class(child, class_override));
    rule.declare("grid-row", placement.row)
        .declare("grid-column", placement.column);
    declare_self_alignment(&mut rule, child);
    rule.finish()
}

/// Container rule followed by one rule per child, separated by blank lines.
pub fn generate_full_css(
    config: &BreakpointConfig,
    placement: PlacementStrategy,
    parent_class: &str,
) -> String {
    let mut rules = Vec::with_capacity(config.children.len() + 1);
    match placement {
        PlacementStrategy::Lines => {
            rules.push(generate_parent_grid_css(&config.grid, parent_class));
            rules.extend(config.children.iter().map(|c| generate_child_css(c, None)));
        }
        PlacementStrategy::Areas => {
            rules.push(generate_parent_grid_css_with_areas(
                &config.grid,
                &config.children,
                parent_class,
            ));
            rules.extend(config.children.iter().map(|c| generate_child_css_area(c, None)));
        }
    }
    rules.join("\n\n")
}
