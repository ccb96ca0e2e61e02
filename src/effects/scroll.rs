const HERO_INDICATOR_LIMIT: f64 = 50.0;
const PARALLAX_FACTOR: f64 = 0.2;

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn progress(scroll_y: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn progress_transform(fraction: f64) -> String {
    format!("transform: scaleX({});", fraction)
}

pub fn hero_indicator_visible(scroll_y: f64) -> bool {
    scroll_y < HERO_INDICATOR_LIMIT
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("transform: translateY(-{}px);", scroll_y * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn hero_indicator_fades_after_fifty_pixels() {
        assert!(hero_indicator_visible(0.0));
        assert!(hero_indicator_visible(49.0));
        assert!(!hero_indicator_visible(50.0));
    }

    #[test]
    fn parallax_moves_at_a_fifth_of_scroll() {
        assert_eq!(parallax_transform(100.0), "transform: translateY(-20px);");
        assert_eq!(progress_transform(0.25), "transform: scaleX(0.25);");
    }
}
