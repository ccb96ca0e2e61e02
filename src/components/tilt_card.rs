use web_sys::Element;
use yew::prelude::*;

use crate::effects::tilt::{tilt_transform, TILT_RESET};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card that leans towards the pointer.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let transform = use_state(|| TILT_RESET.to_string());

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = node.cast::<Element>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            transform.set(tilt_transform(
                e.client_x() as f64 - rect.left(),
                e.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            ));
        })
    };
    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(TILT_RESET.to_string()))
    };

    html! {
        <div ref={node} class={classes!("tilt-card", props.class.clone())}
            style={(*transform).clone()} {onmousemove} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}
