use crate::config::{MOBILE_BREAKPOINT, WHEEL_THRESHOLD};

use super::catalog::ServiceEntry;

/// What the wheel handler should do with the event it was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelAction {
    /// Narrow viewport: let the browser scroll the modal natively.
    Native,
    /// Swallow the event without moving (cooling down or below threshold).
    Ignored,
    /// Moved to `index`; settle with `ticket` once the cooldown elapses.
    Moved { index: usize, ticket: u64 },
}

/// Wheel-driven pager over the slides of one service.
///
/// Invariant: `index < total`. While `animating` is set further wheel
/// input is dropped, not queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    total: usize,
    animating: bool,
    ticket: u64,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        debug_assert!(total > 0, "carousel needs at least one slide");
        Self {
            index: 0,
            total: total.max(1),
            animating: false,
            ticket: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn on_wheel(&mut self, delta_y: f64, viewport_width: f64) -> WheelAction {
        if viewport_width < MOBILE_BREAKPOINT {
            return WheelAction::Native;
        }
        if self.animating || delta_y.abs() < WHEEL_THRESHOLD {
            return WheelAction::Ignored;
        }
        let next = if delta_y > 0.0 {
            (self.index + 1) % self.total
        } else {
            (self.index + self.total - 1) % self.total
        };
        self.move_to(next)
    }

    /// Dot navigation. Not gated by the cooldown, but restarts it.
    /// Clicking the current dot, or one out of range, does nothing.
    pub fn jump_to(&mut self, index: usize) -> Option<WheelAction> {
        if index == self.index || index >= self.total {
            return None;
        }
        Some(self.move_to(index))
    }

    fn move_to(&mut self, index: usize) -> WheelAction {
        self.index = index;
        self.animating = true;
        self.ticket += 1;
        WheelAction::Moved { index, ticket: self.ticket }
    }

    /// Ends the cooldown started by `ticket`. An older ticket is a no-op,
    /// so a newer transition keeps its own cooldown.
    pub fn settle(&mut self, ticket: u64) -> bool {
        if ticket == self.ticket && self.animating {
            self.animating = false;
            true
        } else {
            false
        }
    }

    pub fn view(&self, entry: &'static ServiceEntry) -> SlideView {
        let slide = &entry.slides[self.index.min(entry.slides.len() - 1)];
        SlideView {
            heading: entry.title,
            ordinal: format!("{:02}", self.index + 1),
            title: slide.title,
            description: slide.description,
            dots: (0..self.total).map(|i| i == self.index).collect(),
        }
    }
}

/// Everything needed to draw the current slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideView {
    pub heading: &'static str,
    pub ordinal: String,
    pub title: &'static str,
    pub description: &'static str,
    /// One entry per slide, `true` for the current one.
    pub dots: Vec<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::catalog::ServiceId;

    const DESKTOP: f64 = 1280.0;

    fn moved_index(action: WheelAction) -> usize {
        match action {
            WheelAction::Moved { index, .. } => index,
            other => panic!("expected a move, got {other:?}"),
        }
    }

    fn settle_last(carousel: &mut Carousel, action: WheelAction) {
        if let WheelAction::Moved { ticket, .. } = action {
            assert!(carousel.settle(ticket));
        }
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut carousel = Carousel::new(3);
        let back = carousel.on_wheel(-40.0, DESKTOP);
        assert_eq!(moved_index(back), 2);
        settle_last(&mut carousel, back);

        let fwd = carousel.on_wheel(40.0, DESKTOP);
        assert_eq!(moved_index(fwd), 0);
        assert!(carousel.index() < carousel.total());
    }

    #[test]
    fn cooldown_drops_second_event() {
        let mut carousel = Carousel::new(4);
        let first = carousel.on_wheel(25.0, DESKTOP);
        assert_eq!(moved_index(first), 1);
        assert_eq!(carousel.on_wheel(25.0, DESKTOP), WheelAction::Ignored);
        assert_eq!(carousel.index(), 1);

        settle_last(&mut carousel, first);
        assert_eq!(moved_index(carousel.on_wheel(25.0, DESKTOP)), 2);
    }

    #[test]
    fn small_deltas_are_ignored() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.on_wheel(19.9, DESKTOP), WheelAction::Ignored);
        assert_eq!(carousel.on_wheel(-5.0, DESKTOP), WheelAction::Ignored);
        assert!(!carousel.is_animating());
        assert_eq!(moved_index(carousel.on_wheel(20.0, DESKTOP)), 1);
    }

    #[test]
    fn narrow_viewports_scroll_natively() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.on_wheel(100.0, 767.0), WheelAction::Native);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn dots_jump_directly_and_restart_cooldown() {
        let mut carousel = Carousel::new(4);
        let first = carousel.on_wheel(30.0, DESKTOP);
        let jump = carousel.jump_to(3).unwrap();
        assert_eq!(moved_index(jump), 3);

        // The cooldown of the wheel move must not end the dot's cooldown.
        if let WheelAction::Moved { ticket, .. } = first {
            assert!(!carousel.settle(ticket));
        }
        assert!(carousel.is_animating());
        settle_last(&mut carousel, jump);
        assert!(!carousel.is_animating());

        assert_eq!(carousel.jump_to(3), None);
        assert_eq!(carousel.jump_to(9), None);
    }

    #[test]
    fn ia_scenario() {
        let entry = ServiceId::Ia.entry();
        let mut carousel = Carousel::new(entry.slides.len());
        assert_eq!(carousel.total(), 2);

        let view = carousel.view(entry);
        assert_eq!(view.title, "Chatbots inteligentes");
        assert_eq!(view.heading, "Agentes de IA");
        assert_eq!(view.ordinal, "01");
        assert_eq!(view.dots, vec![true, false]);

        let step = carousel.on_wheel(50.0, DESKTOP);
        assert_eq!(moved_index(step), 1);
        assert_eq!(carousel.view(entry).title, "Automatizacion con IA");
        assert_eq!(carousel.view(entry).ordinal, "02");
        settle_last(&mut carousel, step);

        assert_eq!(moved_index(carousel.on_wheel(50.0, DESKTOP)), 0);
        assert_eq!(carousel.view(entry).title, "Chatbots inteligentes");
    }
}
