use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::AUTO_SCROLL_SUPPRESS_MS;
use crate::effects::clock::format_clock;
use crate::effects::navbar::NavbarTracker;

const MENU: &[(&str, &str)] = &[
    ("#servicios", "Servicios"),
    ("#portafolio", "Portafolio"),
    ("#acerca", "Acerca"),
    ("#tecnologias", "Tecnologías"),
    ("#conecta", "Conecta"),
];

fn page_metrics() -> Option<(f64, f64, f64)> {
    let window = window()?;
    let y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let doc_height = window.document()?.document_element()?.scroll_height() as f64;
    Some((y, doc_height, viewport))
}

#[function_component(SmartNavbar)]
pub fn smart_navbar() -> Html {
    let hidden = use_state(|| false);
    let tracker = use_mut_ref(|| NavbarTracker::new(page_metrics().map(|(y, _, _)| y).unwrap_or(0.0)));

    {
        let hidden = hidden.clone();
        let tracker = tracker.clone();
        use_event_with_window("scroll", move |_: Event| {
            let Some((y, doc_height, viewport)) = page_metrics() else {
                return;
            };
            if let Some(now_hidden) = tracker.borrow_mut().on_scroll(y, doc_height, viewport) {
                hidden.set(now_hidden);
            }
        });
    }

    // Anchor jumps scroll smoothly; don't treat that as the visitor
    // scrolling down.
    let suppress = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            let ticket = tracker.borrow_mut().suppress();
            let tracker = tracker.clone();
            Timeout::new(AUTO_SCROLL_SUPPRESS_MS, move || tracker.borrow_mut().release(ticket)).forget();
        })
    };

    html! {
        <nav class={classes!("smart-navbar", (*hidden).then_some("nav-hidden"))}>
            <a href="#home" class="logo" onclick={suppress.clone()}>{"ReCode+"}</a>
            <ul class="menu">
                { for MENU.iter().map(|(href, label)| html! {
                    <li><a href={*href} onclick={suppress.clone()}>{*label}</a></li>
                }) }
            </ul>
            <Clock />
            <a href="#contacto" class="contacto" onclick={suppress}>{"Contacto"}</a>
        </nav>
    }
}

#[function_component(Clock)]
pub fn clock() -> Html {
    let now = use_state(|| format_clock(&chrono::Local::now()));

    {
        let now = now.clone();
        use_interval(move || now.set(format_clock(&chrono::Local::now())), 1000);
    }

    html! {
        <span id="time-display" class="time-display">{(*now).clone()}</span>
    }
}
