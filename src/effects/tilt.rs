const MAX_DEGREES: f64 = 5.0;

pub const TILT_RESET: &str = "transform: perspective(1000px) rotateX(0) rotateY(0) scale(1);";

/// Transform for a pointer at (`x`, `y`) relative to a `width` x `height`
/// card: up to five degrees of tilt towards the pointer.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return TILT_RESET.to_string();
    }
    let x_center = width / 2.0;
    let y_center = height / 2.0;
    let rotate_x = ((y_center - y) / y_center) * MAX_DEGREES;
    let rotate_y = ((x - x_center) / x_center) * MAX_DEGREES;
    format!(
        "transform: perspective(1000px) rotateX({}deg) rotateY({}deg) scale(1.02);",
        rotate_x, rotate_y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat_and_corners_hit_the_limit() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 200.0, 100.0),
            "transform: perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1.02);"
        );
        assert_eq!(
            tilt_transform(0.0, 0.0, 200.0, 100.0),
            "transform: perspective(1000px) rotateX(5deg) rotateY(-5deg) scale(1.02);"
        );
    }

    #[test]
    fn degenerate_cards_reset() {
        assert_eq!(tilt_transform(1.0, 1.0, 0.0, 10.0), TILT_RESET);
    }
}
