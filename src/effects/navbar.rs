/// Hide-on-scroll-down navbar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavbarTracker {
    last_y: f64,
    hidden: bool,
    suppressed: bool,
    ticket: u64,
}

const BOTTOM_ZONE: f64 = 200.0;
const TOP_ZONE: f64 = 100.0;

impl NavbarTracker {
    pub fn new(initial_y: f64) -> Self {
        Self {
            last_y: initial_y,
            ..Self::default()
        }
    }

    /// A menu link started a smooth scroll; ignore scrolling until the
    /// returned ticket is released.
    pub fn suppress(&mut self) -> u64 {
        self.suppressed = true;
        self.ticket += 1;
        self.ticket
    }

    pub fn release(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.suppressed = false;
        }
    }

    /// Returns the new hidden flag, or `None` while suppressed.
    pub fn on_scroll(&mut self, y: f64, doc_height: f64, viewport_height: f64) -> Option<bool> {
        if self.suppressed {
            return None;
        }
        let to_bottom = doc_height - (y + viewport_height);
        self.hidden = if to_bottom < BOTTOM_ZONE {
            false
        } else {
            y > self.last_y && y > TOP_ZONE
        };
        self.last_y = y;
        Some(self.hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: f64 = 5000.0;
    const VIEW: f64 = 800.0;

    #[test]
    fn hides_going_down_and_shows_going_up() {
        let mut nav = NavbarTracker::new(0.0);
        assert_eq!(nav.on_scroll(50.0, DOC, VIEW), Some(false));
        assert_eq!(nav.on_scroll(400.0, DOC, VIEW), Some(true));
        assert_eq!(nav.on_scroll(350.0, DOC, VIEW), Some(false));
    }

    #[test]
    fn always_visible_near_the_bottom() {
        let mut nav = NavbarTracker::new(3000.0);
        assert_eq!(nav.on_scroll(4100.0, DOC, VIEW), Some(false));
    }

    #[test]
    fn suppression_freezes_state_until_released() {
        let mut nav = NavbarTracker::new(0.0);
        nav.on_scroll(500.0, DOC, VIEW);
        let stale = nav.suppress();
        let ticket = nav.suppress();
        assert_eq!(nav.on_scroll(2000.0, DOC, VIEW), None);

        nav.release(stale);
        assert_eq!(nav.on_scroll(2100.0, DOC, VIEW), None);

        nav.release(ticket);
        // last_y stayed at 500, so 450 reads as scrolling up.
        assert_eq!(nav.on_scroll(450.0, DOC, VIEW), Some(false));
    }
}
