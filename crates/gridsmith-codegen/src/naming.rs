use gridsmith_core::GridChild;

/// Class used when a name sanitizes to nothing.
pub const FALLBACK_CLASS: &str = "child";

/// Trim and collapse internal whitespace runs to single hyphens.
/// The result may be empty.
pub fn normalize_identifier(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Sanitize a child name into a CSS class name, defaulting to `child`.
pub fn to_class_name(name: &str) -> String {
    let class = normalize_identifier(name);
    if class.is_empty() {
        FALLBACK_CLASS.to_string()
    } else {
        class
    }
}

/// Sanitized area name for a child; empty when neither the area name nor
/// the child name has any visible characters.
pub fn area_name(child: &GridChild) -> String {
    normalize_identifier(child.effective_area_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_collapses_whitespace() {
        assert_eq!(to_class_name("  main   content\tarea "), "main-content-area");
        assert_eq!(to_class_name("header"), "header");
    }

    #[test]
    fn test_blank_name_falls_back() {
        assert_eq!(to_class_name(""), "child");
        assert_eq!(to_class_name("   "), "child");
    }

    #[test]
    fn test_area_name_can_be_empty() {
        let child = GridChild::new("  ", vec![]);
        assert_eq!(area_name(&child), "");
        let named = GridChild::new("x", vec![]).with_area_name("side bar");
        assert_eq!(area_name(&named), "side-bar");
    }
}
