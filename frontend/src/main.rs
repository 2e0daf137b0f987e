use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod compare;
mod config;
mod lead;
mod components {
    pub mod comparison;
    pub mod dialog;
    pub mod footer;
    pub mod header;
    pub mod lead_form;
    pub mod providers;
    pub mod tariffs;
    pub mod toast;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod legal;
}

use config::PageVariant;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[at("/extended")]
    Extended,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    fn variant(&self) -> PageVariant {
        match self {
            Route::Classic => PageVariant::Classic,
            Route::Extended => PageVariant::Extended,
            Route::Home | Route::NotFound => PageVariant::Tabs,
        }
    }
}

fn switch(route: Route) -> Html {
    let variant = route.variant();
    info!("Rendering {} page", variant.name());
    html! { <Landing {variant} /> }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_map_to_variants() {
        assert_eq!(Route::Home.variant(), PageVariant::Tabs);
        assert_eq!(Route::Classic.variant(), PageVariant::Classic);
        assert_eq!(Route::Extended.variant(), PageVariant::Extended);
        assert_eq!(Route::NotFound.variant(), PageVariant::Tabs);
    }
}
