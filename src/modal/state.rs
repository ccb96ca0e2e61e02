use super::carousel::{Carousel, SlideView, WheelAction};
use super::catalog::{ServiceEntry, ServiceId};

const PROJECT_BACKGROUND: &str = "background: #111;";

/// Portfolio card contents shown in the static panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetail {
    pub title: String,
    pub category: String,
    pub color_tag: Option<String>,
}

impl ProjectDetail {
    /// Picks the colour tag from the thumbnail's class list (the first
    /// `thumb-*` class).
    pub fn from_card(title: &str, category: &str, thumb_classes: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            category: category.trim().to_string(),
            color_tag: thumb_classes
                .split_whitespace()
                .find(|c| c.starts_with("thumb-"))
                .map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalView {
    Closed,
    Service { id: ServiceId, carousel: Carousel },
    Project(ProjectDetail),
}

/// The shared overlay. Whichever open call ran last owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalState {
    view: ModalView,
    /// Bumped on every open so timers from an earlier session go stale.
    session: u64,
    // Survives close so the fade-out keeps the last content.
    last_open: Option<ModalView>,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            view: ModalView::Closed,
            session: 0,
            last_open: None,
        }
    }
}

impl ModalState {
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.view, ModalView::Closed)
    }

    /// Opens the carousel for `tag`. Unknown tags leave the modal as is.
    pub fn open_service(&mut self, tag: &str) -> Option<u64> {
        let id: ServiceId = tag.parse().ok()?;
        let carousel = Carousel::new(id.entry().slides.len());
        Some(self.replace(ModalView::Service { id, carousel }))
    }

    pub fn open_project(&mut self, detail: ProjectDetail) -> u64 {
        self.replace(ModalView::Project(detail))
    }

    fn replace(&mut self, view: ModalView) -> u64 {
        self.session += 1;
        self.last_open = Some(view.clone());
        self.view = view;
        self.session
    }

    pub fn close(&mut self) {
        self.view = ModalView::Closed;
    }

    /// Only the carousel variant listens to the wheel.
    pub fn wheel_capture(&self) -> bool {
        matches!(self.view, ModalView::Service { .. })
    }

    pub fn on_wheel(&mut self, delta_y: f64, viewport_width: f64) -> WheelAction {
        match &mut self.view {
            ModalView::Service { carousel, .. } => {
                let action = carousel.on_wheel(delta_y, viewport_width);
                self.sync_last_open();
                action
            }
            _ => WheelAction::Native,
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Option<WheelAction> {
        let action = match &mut self.view {
            ModalView::Service { carousel, .. } => carousel.jump_to(index),
            _ => None,
        };
        self.sync_last_open();
        action
    }

    /// Cooldown expiry for `ticket` issued during `session`.
    pub fn settle(&mut self, session: u64, ticket: u64) -> bool {
        if session != self.session {
            return false;
        }
        let settled = match &mut self.view {
            ModalView::Service { carousel, .. } => carousel.settle(ticket),
            _ => false,
        };
        self.sync_last_open();
        settled
    }

    fn sync_last_open(&mut self) {
        if self.is_active() {
            self.last_open = Some(self.view.clone());
        }
    }

    /// Content to draw: the open view, or the last one while closed.
    pub fn content(&self) -> Option<&ModalView> {
        match self.view {
            ModalView::Closed => self.last_open.as_ref(),
            _ => Some(&self.view),
        }
    }

    pub fn slide(&self) -> Option<(&'static ServiceEntry, SlideView)> {
        match self.content()? {
            ModalView::Service { id, carousel } => {
                let entry = id.entry();
                Some((entry, carousel.view(entry)))
            }
            _ => None,
        }
    }

    pub fn container_class(&self) -> String {
        match self.content() {
            Some(ModalView::Service { id, .. }) => format!("modal-content {}", id.entry().theme),
            _ => "modal-content".to_string(),
        }
    }

    pub fn container_style(&self) -> Option<&'static str> {
        match self.content() {
            Some(ModalView::Project(_)) => Some(PROJECT_BACKGROUND),
            _ => None,
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.is_active() {
            "modal active"
        } else {
            "modal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f64 = 1440.0;

    fn project() -> ProjectDetail {
        ProjectDetail::from_card(" Tienda Nova ", "E-commerce", "project-thumb thumb-blue hover")
    }

    #[test]
    fn project_detail_reads_thumb_class() {
        let detail = project();
        assert_eq!(detail.title, "Tienda Nova");
        assert_eq!(detail.color_tag.as_deref(), Some("thumb-blue"));
        assert_eq!(ProjectDetail::from_card("a", "b", "project-thumb").color_tag, None);
    }

    #[test]
    fn service_open_starts_at_first_slide_with_theme() {
        let mut modal = ModalState::default();
        assert_eq!(modal.overlay_class(), "modal");
        modal.open_service("apps").unwrap();
        assert!(modal.is_active());
        assert!(modal.wheel_capture());
        assert_eq!(modal.container_class(), "modal-content theme-apps");
        assert_eq!(modal.container_style(), None);
        let (_, view) = modal.slide().unwrap();
        assert_eq!(view.title, "Aplicaciones móviles");
        assert_eq!(view.dots.len(), 3);
    }

    #[test]
    fn unknown_service_is_a_no_op() {
        let mut modal = ModalState::default();
        assert_eq!(modal.open_service("blockchain"), None);
        assert!(!modal.is_active());
        assert_eq!(modal.session(), 0);
    }

    #[test]
    fn project_replaces_carousel_and_drops_wheel_capture() {
        let mut modal = ModalState::default();
        modal.open_service("web");
        modal.on_wheel(80.0, DESKTOP);
        modal.open_project(project());

        assert!(!modal.wheel_capture());
        assert_eq!(modal.on_wheel(80.0, DESKTOP), WheelAction::Native);
        assert_eq!(modal.container_class(), "modal-content");
        assert_eq!(modal.container_style(), Some(PROJECT_BACKGROUND));
        assert!(modal.slide().is_none());
    }

    #[test]
    fn reopening_resets_the_carousel() {
        let mut modal = ModalState::default();
        modal.open_service("web");
        modal.on_wheel(80.0, DESKTOP);
        assert_eq!(modal.slide().unwrap().1.ordinal, "02");

        modal.close();
        modal.open_service("web");
        let (_, view) = modal.slide().unwrap();
        assert_eq!(view.ordinal, "01");
    }

    #[test]
    fn cooldown_from_previous_session_is_stale() {
        let mut modal = ModalState::default();
        let old_session = modal.open_service("web").unwrap();
        let ticket = match modal.on_wheel(80.0, DESKTOP) {
            WheelAction::Moved { ticket, .. } => ticket,
            other => panic!("unexpected {other:?}"),
        };

        let new_session = modal.open_service("software").unwrap();
        let fresh = match modal.on_wheel(80.0, DESKTOP) {
            WheelAction::Moved { ticket, .. } => ticket,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(ticket, fresh);

        assert!(!modal.settle(old_session, ticket));
        assert_eq!(modal.on_wheel(80.0, DESKTOP), WheelAction::Ignored);
        assert!(modal.settle(new_session, fresh));
    }

    #[test]
    fn close_keeps_content_for_fade_out() {
        let mut modal = ModalState::default();
        modal.open_project(project());
        modal.close();
        assert!(!modal.is_active());
        assert_eq!(modal.overlay_class(), "modal");
        assert!(matches!(modal.content(), Some(ModalView::Project(_))));
        assert!(!modal.wheel_capture());
    }
}
