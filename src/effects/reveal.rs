/// Visibility of a scroll-revealed element. Hidden states remember which
/// edge the element left through so it re-enters from that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    HiddenBelow,
    HiddenAbove,
    Shown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Hides again when leaving through either edge.
    BothWays,
    /// Stays shown once scrolled past; only hides when scrolled back above
    /// its start.
    ReverseOnly,
}

impl Default for Reveal {
    fn default() -> Self {
        Reveal::HiddenBelow
    }
}

impl Reveal {
    /// `top` is the element's top edge relative to the viewport.
    pub fn next(self, mode: RevealMode, intersecting: bool, top: f64) -> Reveal {
        if intersecting {
            return Reveal::Shown;
        }
        let left_through_top = top < 0.0;
        match (mode, left_through_top) {
            (RevealMode::BothWays, true) => Reveal::HiddenAbove,
            (RevealMode::ReverseOnly, true) => self,
            (_, false) => Reveal::HiddenBelow,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Reveal::HiddenBelow => "reveal hidden-below",
            Reveal::HiddenAbove => "reveal hidden-above",
            Reveal::Shown => "reveal shown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_ways_tracks_exit_edge() {
        let r = Reveal::default().next(RevealMode::BothWays, true, 300.0);
        assert_eq!(r, Reveal::Shown);
        let r = r.next(RevealMode::BothWays, false, -200.0);
        assert_eq!(r, Reveal::HiddenAbove);
        assert_eq!(r.css_class(), "reveal hidden-above");
        let r = r.next(RevealMode::BothWays, false, 900.0);
        assert_eq!(r, Reveal::HiddenBelow);
    }

    #[test]
    fn reverse_only_stays_after_scrolling_past() {
        let shown = Reveal::default().next(RevealMode::ReverseOnly, true, 100.0);
        assert_eq!(shown.next(RevealMode::ReverseOnly, false, -50.0), Reveal::Shown);
        assert_eq!(shown.next(RevealMode::ReverseOnly, false, 700.0), Reveal::HiddenBelow);
    }
}
