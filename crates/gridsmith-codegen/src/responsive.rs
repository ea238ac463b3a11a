use gridsmith_core::{Breakpoint, LayoutState, PlacementStrategy};

use crate::css::generate_full_css;

/// Mobile-first stylesheet covering all three breakpoints.
///
/// The mobile rules are emitted bare as the base; tablet and desktop follow,
/// each wrapped in a `min-width` media query, in that order.
pub fn generate_responsive_css(
    state: &LayoutState,
    placement: PlacementStrategy,
    parent_class: &str,
) -> String {
    let mut sections = Vec::with_capacity(Breakpoint::ALL.len());
    for breakpoint in Breakpoint::ALL {
        let config = state.config(breakpoint);
        log::trace!(
            "Generating {} CSS for {} children",
            breakpoint,
            config.children.len()
        );
        let css = generate_full_css(config, placement, parent_class);
        if breakpoint.min_width() == 0 {
            sections.push(css);
        } else {
            sections.push(format!(
                "@media (min-width: {}px) {{\n{}\n}}",
                breakpoint.min_width(),
                indent(&css, "  ")
            ));
        }
    }
    sections.join("\n\n")
}

/// Indent every non-blank line.
fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_keeps_blank_lines_bare() {
        assert_eq!(indent("a {\n}\n\nb", "  "), "  a {\n  }\n\n  b");
    }

    #[test]
    fn test_responsive_order_and_wrapping() {
        let mut state = LayoutState::default();
        state.breakpoints.get_mut(Breakpoint::Mobile).grid.column_count = 1;
        state.breakpoints.get_mut(Breakpoint::Mobile).grid.column_sizes.truncate(1);

        let css = generate_responsive_css(&state, PlacementStrategy::Lines, "grid-container");
        assert!(css.starts_with(".grid-container {\n  display: grid;"));
        assert!(css.contains("grid-template-columns: 1fr;\n"));

        let tablet = css.find("@media (min-width: 768px) {").unwrap();
        let desktop = css.find("@media (min-width: 1200px) {").unwrap();
        assert!(tablet < desktop);
        assert!(css.contains("@media (min-width: 768px) {\n  .grid-container {\n    display: grid;"));
        assert!(!css.contains("min-width: 0px"));
        assert!(css.ends_with("  }\n}"));
    }
}
