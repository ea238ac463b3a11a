//! Named-area CSS generation: `grid-template-areas` plus `grid-area` per child.

use gridsmith_core::{GridChild, GridDefinition};

use crate::css::{
    child_class, declare_self_alignment, generate_child_css, generate_parent_grid_css,
    parent_rule, CssRule,
};
use crate::naming::area_name;

/// Placeholder for cells not covered by any named child.
pub const EMPTY_AREA: &str = ".";

/// Paint each child's bounding box into a `rows × columns` name matrix and
/// serialize it as quoted, newline-separated rows.
///
/// Children without a usable area name are skipped. Where boxes overlap the
/// later child in `children` wins; overlaps are not reported. Boxes reaching
/// past the grid are clipped to it. A grid with no rows or no columns has no
/// areas to name and yields an empty string.
pub fn generate_template_areas(row_count: u32, column_count: u32, children: &[GridChild]) -> String {
    if row_count == 0 || column_count == 0 {
        return String::new();
    }
    let mut matrix = vec![vec![EMPTY_AREA.to_string(); column_count as usize]; row_count as usize];

    for child in children {
        let name = area_name(child);
        if name.is_empty() {
            continue;
        }
        let Some(bounds) = child.bounds() else {
            continue;
        };
        for row in bounds.row_start..=bounds.row_end {
            let Some(line) = matrix.get_mut(row as usize) else {
                break;
            };
            for column in bounds.column_start..=bounds.column_end {
                match line.get_mut(column as usize) {
                    Some(slot) => *slot = name.clone(),
                    None => break,
                }
            }
        }
    }

    matrix
        .iter()
        .map(|line| format!("\"{}\"", line.join(" ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Container rule with a `grid-template-areas` block ahead of the track
/// lists. With no children there is nothing to name, so this is the plain
/// line-based container rule.
pub fn generate_parent_grid_css_with_areas(
    grid: &GridDefinition,
    children: &[GridChild],
    parent_class: &str,
) -> String {
    if children.is_empty() {
        return generate_parent_grid_css(grid, parent_class);
    }
    let areas = generate_template_areas(grid.row_count, grid.column_count, children);
    parent_rule(grid, parent_class, Some(&areas)).finish()
}

/// `grid-area` rule for one child, or the line-based rule when the child has
/// no usable area name.
pub fn generate_child_css_area(child: &GridChild, class_override: Option<&str>) -> String {
    let name = area_name(child);
    if name.is_empty() {
        return generate_child_css(child, class_override);
    }
    let mut rule = CssRule::class(&child_class(child, class_override));
    rule.declare("grid-area", name);
    declare_self_alignment(&mut rule, child);
    rule.finish()
}
