#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub left: f64,
    pub top: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!("left: {}%; top: {}%;", self.left, self.top)
    }
}

/// Places `count` stars using `random`, which must yield values in `[0, 1)`.
pub fn scatter(count: usize, mut random: impl FnMut() -> f64) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left: random() * 100.0,
            top: random() * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_stay_inside_the_layer() {
        let mut seed = 0.0_f64;
        let stars = scatter(50, || {
            seed = (seed + 0.137) % 1.0;
            seed
        });
        assert_eq!(stars.len(), 50);
        assert!(stars.iter().all(|s| (0.0..100.0).contains(&s.left) && (0.0..100.0).contains(&s.top)));
    }

    #[test]
    fn style_uses_percentages() {
        let star = Star { left: 12.5, top: 80.0 };
        assert_eq!(star.style(), "left: 12.5%; top: 80%;");
    }
}
