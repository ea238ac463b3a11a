use gridsmith_core::GridChild;

use crate::naming::to_class_name;

/// Wrapper `div` holding one empty `div` per child, in child order, with
/// classes matching the generated CSS selectors.
pub fn generate_html(children: &[GridChild], parent_class: &str) -> String {
    let mut out = format!("<div class=\"{}\">\n", parent_class);
    for child in children {
        out.push_str(&format!("  <div class=\"{}\"></div>\n", to_class_name(&child.name)));
    }
    out.push_str("</div>");
    out
}
