/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Counter value after `elapsed_ms`, and whether the animation is over.
pub fn counter_frame(start: i64, end: i64, elapsed_ms: f64, duration_ms: f64) -> (i64, bool) {
    let progress = if duration_ms <= 0.0 {
        1.0
    } else {
        (elapsed_ms / duration_ms).min(1.0)
    };
    let value = start as f64 + (end - start) as f64 * ease_out_cubic(progress);
    (value.floor() as i64, progress >= 1.0)
}

/// Lenient integer parse of a `data-target` attribute: leading sign and
/// digits are used, anything after them ignored.
pub fn parse_target(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_the_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn frames_progress_to_target() {
        assert_eq!(counter_frame(0, 150, 0.0, 2500.0), (0, false));
        let (mid, done) = counter_frame(0, 150, 1250.0, 2500.0);
        assert!(mid > 75 && mid < 150);
        assert!(!done);
        assert_eq!(counter_frame(0, 150, 2500.0, 2500.0), (150, true));
        assert_eq!(counter_frame(0, 150, 9000.0, 2500.0), (150, true));
        assert_eq!(counter_frame(0, 7, 10.0, 0.0), (7, true));
    }

    #[test]
    fn target_parsing_follows_leading_digits() {
        assert_eq!(parse_target("120"), Some(120));
        assert_eq!(parse_target(" 98%"), Some(98));
        assert_eq!(parse_target("-3"), Some(-3));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
    }
}
