use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Math;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::effects::decoder::{typewriter_prefix, Decoder};
use crate::effects::scroll::hero_indicator_visible;

const DECODE_TICK_MS: u32 = 30;
const SETTLE_MS: u32 = 800;
// Hero fade-in delay plus duration.
const HERO_ENTRY_MS: u32 = 1_700;
const TYPE_SPEED_MS: u32 = 50;
const SUBTITLE: &str = "El codigo es la realidad...";

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Decoding,
    Loaded,
    Typing,
    Ready,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Word the preloader decodes before revealing the page.
    #[prop_or(AttrValue::Static("SYSTEM"))]
    pub decode: AttrValue,
}

/// Preloader plus the hero it hands over to: decode the word, fade the
/// hero in, type the subtitle, then offer the scroll hint.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let frame = use_state(String::new);
    let stage = use_state(|| Stage::Decoding);
    let typed = use_state(|| 0usize);
    let (_, scroll_y) = use_window_scroll();

    {
        let frame = frame.clone();
        let stage = stage.clone();
        let typed = typed.clone();
        use_effect_with_deps(
            move |word: &AttrValue| {
                let mut decoder = Decoder::new(word);
                spawn_local(async move {
                    loop {
                        let (text, done) = decoder.tick(|n| (Math::random() * n as f64) as usize);
                        frame.set(text);
                        if done {
                            break;
                        }
                        TimeoutFuture::new(DECODE_TICK_MS).await;
                    }
                    TimeoutFuture::new(SETTLE_MS).await;
                    stage.set(Stage::Loaded);

                    TimeoutFuture::new(HERO_ENTRY_MS).await;
                    stage.set(Stage::Typing);
                    for n in 1..=SUBTITLE.chars().count() {
                        typed.set(n);
                        TimeoutFuture::new(TYPE_SPEED_MS).await;
                    }
                    stage.set(Stage::Ready);
                });
                || ()
            },
            props.decode.clone(),
        );
    }

    let loaded = *stage >= Stage::Loaded;
    let indicator_style = if *stage == Stage::Ready && hero_indicator_visible(scroll_y) {
        "opacity: 1;"
    } else {
        "opacity: 0;"
    };

    html! {
        <>
            <div id="preloader" class={classes!("preloader", loaded.then_some("loaded"))}>
                <span class="decoder-text" data-value={props.decode.clone()}>{(*frame).clone()}</span>
            </div>
            <div class="hero">
                <h1 class={classes!("hero-anim", loaded.then_some("in"))}>{"ReCode+"}</h1>
                <p id="typing-sub" class={classes!("hero-anim", loaded.then_some("in"))}>
                    {typewriter_prefix(SUBTITLE, *typed)}
                </p>
                <a href="#servicios" class="hero-scroll-indicator" style={indicator_style}>
                    <div class="mouse-icon"></div>
                </a>
            </div>
        </>
    }
}
