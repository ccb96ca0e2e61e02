use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{MOBILE_BREAKPOINT, RIPPLE_LIFETIME_MS, STARFIELD_DELAY_MS, STAR_COUNT};
use crate::effects::scroll::{parallax_transform, progress, progress_transform};
use crate::effects::stars::{scatter, Star};

#[function_component(Starfield)]
pub fn starfield() -> Html {
    let stars = use_state(Vec::<Star>::new);
    let (_, scroll_y) = use_window_scroll();

    {
        let stars = stars.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(STARFIELD_DELAY_MS, move || {
                    stars.set(scatter(STAR_COUNT, Math::random));
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let doc_height = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height())
        .unwrap_or(0);

    html! {
        <div class="stars-wrapper">
            <div class="stars-container"
                style={format!("height: {}px; {}", doc_height, parallax_transform(scroll_y))}>
                { for stars.iter().map(|star| html! {
                    <div class="star" style={star.style()}></div>
                }) }
            </div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct Ripple {
    id: u64,
    x: i32,
    y: i32,
}

enum RippleAction {
    Add(u64, i32, i32),
    Remove(u64),
}

#[derive(Default, PartialEq)]
struct Ripples {
    live: Vec<Ripple>,
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: RippleAction) -> Rc<Self> {
        let mut live = self.live.clone();
        match action {
            RippleAction::Add(id, x, y) => live.push(Ripple { id, x, y }),
            RippleAction::Remove(id) => live.retain(|r| r.id != id),
        }
        Rc::new(Ripples { live })
    }
}

/// Expanding ring wherever the visitor clicks.
#[function_component(ClickRipples)]
pub fn click_ripples() -> Html {
    let ripples = use_reducer(Ripples::default);
    let next_id = use_mut_ref(|| 0u64);

    {
        let dispatcher = ripples.dispatcher();
        use_event_with_window("click", move |e: MouseEvent| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            dispatcher.dispatch(RippleAction::Add(id, e.client_x(), e.client_y()));
            let dispatcher = dispatcher.clone();
            Timeout::new(RIPPLE_LIFETIME_MS, move || dispatcher.dispatch(RippleAction::Remove(id))).forget();
        });
    }

    html! {
        <>
            { for ripples.live.iter().map(|r| html! {
                <div key={r.id} class="click-ripple" style={format!("left: {}px; top: {}px;", r.x, r.y)}></div>
            }) }
        </>
    }
}

fn wide_viewport() -> bool {
    window()
        .and_then(|w| w.match_media(&format!("(min-width: {}px)", MOBILE_BREAKPOINT)).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Dot plus trailing outline replacing the pointer on wide screens.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let enabled = use_memo(|_| wide_viewport(), ());
    let position = use_state(|| None::<(i32, i32)>);

    {
        let position = position.clone();
        let enabled = *enabled;
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if enabled {
                position.set(Some((e.client_x(), e.client_y())));
            }
        });
    }

    let Some((x, y)) = *position else {
        return html! {};
    };
    let style = format!("left: {}px; top: {}px;", x, y);

    html! {
        <>
            <div class="cursor-dot" style={style.clone()}></div>
            <div class="cursor-outline" {style}></div>
        </>
    }
}

/// Thin bar across the top showing how far down the page the visitor is.
#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    let doc_height = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);

    html! {
        <div class="scroll-progress" style={progress_transform(progress(scroll_y, doc_height, viewport_height))}></div>
    }
}
