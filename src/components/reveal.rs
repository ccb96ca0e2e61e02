use std::rc::Rc;

use log::warn;
use web_sys::window;
use yew::prelude::*;

use super::observer::{use_crossing, Crossing};
use crate::effects::reveal::{Reveal as RevealPhase, RevealMode};
use crate::effects::theme::{theme_for, CENTER_LINE_MARGIN, THEME_ATTRIBUTE};

// Trigger line at 85% of the viewport height.
const REVEAL_MARGIN: &str = "0px 0px -15% 0px";

#[derive(Clone, PartialEq)]
struct RevealState {
    mode: RevealMode,
    phase: RevealPhase,
}

impl Reducible for RevealState {
    type Action = Crossing;

    fn reduce(self: Rc<Self>, crossing: Crossing) -> Rc<Self> {
        let phase = self.phase.next(self.mode, crossing.intersecting, crossing.top);
        if phase == self.phase {
            return self;
        }
        Rc::new(Self { mode: self.mode, phase })
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(RevealMode::BothWays)]
    pub mode: RevealMode,
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay for staggered groups.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Wrapper that slides its children in when they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let mode = props.mode;
    let state = use_reducer(move || RevealState {
        mode,
        phase: RevealPhase::default(),
    });

    {
        let dispatcher = state.dispatcher();
        use_crossing(
            node.clone(),
            REVEAL_MARGIN,
            0.0,
            Callback::from(move |crossing| dispatcher.dispatch(crossing)),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node} class={classes!(state.phase.css_class(), props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Page section that hands its theme to `<body>` while it spans the
/// middle of the viewport.
#[function_component(ThemeSection)]
pub fn theme_section(props: &ThemeSectionProps) -> Html {
    let node = use_node_ref();
    let id = props.id.clone();

    use_crossing(
        node.clone(),
        CENTER_LINE_MARGIN,
        0.0,
        Callback::from(move |crossing: Crossing| {
            if !crossing.intersecting {
                return;
            }
            let Some(theme) = theme_for(&id) else {
                return;
            };
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                if body.set_attribute(THEME_ATTRIBUTE, theme).is_err() {
                    warn!("Could not apply theme {}", theme);
                }
            }
        }),
    );

    html! {
        <section ref={node} id={props.id.clone()} class={props.class.clone()}>
            { for props.children.iter() }
        </section>
    }
}
