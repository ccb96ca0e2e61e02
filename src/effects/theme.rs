use crate::config::THEME_SECTIONS;

/// Observer margin that shrinks the viewport to its horizontal centre line.
pub const CENTER_LINE_MARGIN: &str = "-50% 0px -50% 0px";
pub const THEME_ATTRIBUTE: &str = "data-current-theme";

pub fn theme_for(section_id: &str) -> Option<&'static str> {
    THEME_SECTIONS
        .iter()
        .find(|(id, _)| *id == section_id)
        .map(|(_, theme)| *theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_alternate_themes() {
        assert_eq!(theme_for("home"), Some("dark"));
        assert_eq!(theme_for("servicios"), Some("light"));
        assert_eq!(theme_for("contacto"), Some("dark"));
        assert_eq!(theme_for("footer"), None);
    }
}
