use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One threshold crossing reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub intersecting: bool,
    /// Top edge of the element relative to the viewport.
    pub top: f64,
}

/// Calls `on_cross` whenever the element behind `node` crosses
/// `threshold` inside the viewport shrunk by `root_margin`.
#[hook]
pub fn use_crossing(node: NodeRef, root_margin: &'static str, threshold: f64, on_cross: Callback<Crossing>) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let mut observer = None;
            let mut callback = None;

            if let Some(element) = node.cast::<Element>() {
                let closure = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        on_cross.emit(Crossing {
                            intersecting: entry.is_intersecting(),
                            top: entry.bounding_client_rect().top(),
                        });
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_root_margin(root_margin);
                options.set_threshold(&JsValue::from_f64(threshold));

                match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
                    Ok(created) => {
                        created.observe(&element);
                        observer = Some(created);
                        callback = Some(closure);
                    }
                    Err(e) => warn!("IntersectionObserver unavailable: {:?}", e),
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        node,
    );
}
