use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod disclosure;
mod scroll;
mod components {
    pub mod button;
    pub mod faq_item;
    pub mod highlight;
    pub mod icons;
    pub mod section_title;
}
mod pages {
    pub mod landing;
}

use pages::landing::{Landing, Variant};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/v2")]
    Alternate,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering primary landing page");
            html! { <Landing variant={Variant::Primary} /> }
        },
        Route::Alternate => {
            info!("Rendering alternate landing page");
            html! { <Landing variant={Variant::Alternate} /> }
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

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
