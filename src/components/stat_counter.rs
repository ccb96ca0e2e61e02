use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Date;
use yew::prelude::*;

use super::observer::{use_crossing, Crossing};
use crate::config::COUNTER_DURATION_MS;
use crate::effects::counter::{counter_frame, parse_target};

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Raw `data-target` value; non-numeric targets never animate.
    pub target: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let text = use_state(|| format!("0{}", props.suffix));
    let visible = use_state(|| false);
    let started = use_mut_ref(|| false);

    {
        let text = text.clone();
        let visible = visible.clone();
        let raw_target = props.target.clone();
        let suffix = props.suffix.clone();
        use_crossing(
            node.clone(),
            "0px",
            0.5,
            Callback::from(move |crossing: Crossing| {
                if !crossing.intersecting || *started.borrow() {
                    return;
                }
                let Some(target) = parse_target(&raw_target) else {
                    return;
                };
                *started.borrow_mut() = true;
                visible.set(true);

                let text = text.clone();
                let suffix = suffix.clone();
                spawn_local(async move {
                    let start = Date::now();
                    loop {
                        let (value, done) = counter_frame(0, target, Date::now() - start, COUNTER_DURATION_MS);
                        text.set(format!("{}{}", value, suffix));
                        if done {
                            break;
                        }
                        TimeoutFuture::new(FRAME_MS).await;
                    }
                });
            }),
        );
    }

    html! {
        <div class={classes!("stat-module", (*visible).then_some("visible"))}>
            <span ref={node} class="stat-num" data-target={props.target.clone()} data-suffix={props.suffix.clone()}>
                {(*text).clone()}
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
