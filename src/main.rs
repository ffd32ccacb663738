use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod motion {
    pub mod spring;
    pub mod geometry;
    pub mod frame;
    pub mod magnetic;
    pub mod drag_reveal;
}
mod booking {
    pub mod models;
    pub mod dialog;
}
mod components {
    pub mod magnetic_button;
    pub mod comparison_slider;
    pub mod cta_button;
    pub mod booking_modal;
    pub mod floating_lights;
    pub mod morphing_image;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
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

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SALON_NAME);
    yew::Renderer::<App>::new().render();
}
