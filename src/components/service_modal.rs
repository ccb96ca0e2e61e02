use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, Element, WheelEvent};
use yew::prelude::*;

use crate::config::SLIDE_COOLDOWN_MS;
use crate::modal::carousel::WheelAction;
use crate::modal::catalog::{PROJECT_BLURB, PROJECT_STACK};
use crate::modal::state::{ModalState, ModalView, ProjectDetail};

/// Shared access to the overlay for the buttons that open it and the
/// overlay itself.
#[derive(Clone)]
pub struct ModalHandle {
    state: Rc<RefCell<ModalState>>,
    redraw: Callback<()>,
}

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

#[hook]
pub fn use_modal() -> ModalHandle {
    let state = use_mut_ref(ModalState::default);
    let force = use_force_update();
    ModalHandle {
        state,
        redraw: Callback::from(move |_| force.force_update()),
    }
}

impl ModalHandle {
    pub fn snapshot(&self) -> ModalState {
        self.state.borrow().clone()
    }

    pub fn open_service(&self, tag: &str) {
        let opened = self.state.borrow_mut().open_service(tag);
        match opened {
            Some(session) => {
                info!("Opening service modal {} (session {})", tag, session);
                self.redraw.emit(());
            }
            None => warn!("No service info for {:?}", tag),
        }
    }

    pub fn open_project(&self, detail: ProjectDetail) {
        info!("Opening project modal {}", detail.title);
        self.state.borrow_mut().open_project(detail);
        self.redraw.emit(());
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.redraw.emit(());
    }

    fn on_wheel(&self, e: &WheelEvent) {
        if !self.state.borrow().wheel_capture() {
            return;
        }
        let width = window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let action = self.state.borrow_mut().on_wheel(e.delta_y(), width);
        if action != WheelAction::Native {
            e.prevent_default();
        }
        self.after_move(action);
    }

    fn jump_to(&self, index: usize) {
        let action = self.state.borrow_mut().jump_to(index);
        if let Some(action) = action {
            self.after_move(action);
        }
    }

    fn after_move(&self, action: WheelAction) {
        let WheelAction::Moved { ticket, .. } = action else {
            return;
        };
        let session = self.state.borrow().session();
        self.redraw.emit(());

        let state = self.state.clone();
        Timeout::new(SLIDE_COOLDOWN_MS, move || {
            state.borrow_mut().settle(session, ticket);
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub handle: ModalHandle,
    /// Copy of the state at render time, so the overlay re-renders when
    /// the shared state changes.
    pub snapshot: ModalState,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let content_ref = use_node_ref();

    // Registered by hand: the wheel must be non-passive to cancel scrolling.
    {
        let handle = props.handle.clone();
        use_effect_with_deps(
            move |content_ref: &NodeRef| {
                let element = content_ref.cast::<Element>();
                let listener = Closure::wrap(Box::new(move |e: WheelEvent| {
                    handle.on_wheel(&e);
                }) as Box<dyn FnMut(WheelEvent)>);

                if let Some(element) = &element {
                    let options = AddEventListenerOptions::new();
                    options.set_passive(false);
                    let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        listener.as_ref().unchecked_ref(),
                        &options,
                    );
                }

                move || {
                    if let Some(element) = element {
                        let _ = element.remove_event_listener_with_callback(
                            "wheel",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            content_ref.clone(),
        );
    }

    let close = {
        let handle = props.handle.clone();
        Callback::from(move |_: MouseEvent| handle.close())
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match props.snapshot.content() {
        Some(ModalView::Service { .. }) => render_slide(&props.handle, &props.snapshot),
        Some(ModalView::Project(detail)) => render_project(detail),
        _ => html! {},
    };

    html! {
        <div id="service-modal" class={props.snapshot.overlay_class()} onclick={close.clone()}>
            <div ref={content_ref}
                class={props.snapshot.container_class()}
                style={props.snapshot.container_style()}
                onclick={keep_open}>
                <span class="close-modal" onclick={close}>{"×"}</span>
                <div id="modal-body">{body}</div>
            </div>
        </div>
    }
}

fn render_slide(handle: &ModalHandle, snapshot: &ModalState) -> Html {
    let Some((_, view)) = snapshot.slide() else {
        return html! {};
    };

    html! {
        <>
            <div class="slide-stage">
                // Keyed on the ordinal so the entry animation replays per slide.
                <div class="single-slide-container" key={view.ordinal.clone()}>
                    <div class="slide-main-title">{view.heading}</div>
                    <div class="slide-number">{view.ordinal.clone()}</div>
                    <h2 class="slide-title">{view.title}</h2>
                    <p class="slide-desc">{view.description}</p>
                </div>
            </div>
            <div class="slide-indicators">
                { for view.dots.iter().enumerate().map(|(i, active)| {
                    let handle = handle.clone();
                    html! {
                        <div class={classes!("indicator-dot", active.then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| handle.jump_to(i))}>
                        </div>
                    }
                }) }
            </div>
            <div class="scroll-hint">
                <div class="mouse-icon"></div>
                <span style="font-size:10px; text-transform:uppercase; letter-spacing:1px; color:rgba(255,255,255,0.7)">
                    {"Scroll"}
                </span>
            </div>
        </>
    }
}

fn render_project(detail: &ProjectDetail) -> Html {
    html! {
        <div class="project-modal-layout">
            <div class={classes!("project-modal-img", detail.color_tag.clone())}></div>
            <div class="project-modal-info">
                <span style="color: #2E86FB; font-weight: bold; text-transform: uppercase; margin-bottom:10px">
                    {detail.category.clone()}
                </span>
                <h2>{detail.title.clone()}</h2>
                <p>{PROJECT_BLURB}</p>
                <span class="tech-stack-label">{"Stack Tecnológico:"}</span>
                <div class="tech-stack-row">
                    { for PROJECT_STACK.iter().map(|tech| html! {
                        <div class="tech-badge" title={tech.name}>
                            <i class={classes!("fa-brands", tech.icon)}></i>
                        </div>
                    }) }
                </div>
                <a href="#" class="btn-primary">{"Ver Sitio en Vivo ↗"}</a>
            </div>
        </div>
    }
}
