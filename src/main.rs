use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact {
    pub mod form;
    pub mod mailer;
    pub mod validation;
}
mod modal {
    pub mod carousel;
    pub mod catalog;
    pub mod state;
}
mod effects {
    pub mod clock;
    pub mod counter;
    pub mod decoder;
    pub mod navbar;
    pub mod reveal;
    pub mod scroll;
    pub mod stars;
    pub mod theme;
    pub mod tilt;
}
mod components {
    pub mod backdrop;
    pub mod contact_form;
    pub mod navbar;
    pub mod notice;
    pub mod observer;
    pub mod preloader;
    pub mod reveal;
    pub mod service_modal;
    pub mod stat_counter;
    pub mod tilt_card;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home} classes="btn-primary">
                        {"Volver al inicio"}
                    </Link<Route>>
                </div>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
