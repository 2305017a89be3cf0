//! Moneo landing site: a Yew single-page app with two autoplaying,
//! swipeable carousels, a waitlist form and opt-in analytics.

pub mod analytics;
pub mod carousel;
pub mod components;
pub mod config;
pub mod content;
pub mod context;
pub mod pages;
pub mod preregister;
pub mod scroll;
pub mod theme;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::Analytics;
use crate::context::AppDataProvider;
use crate::pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Installed before rendering; child effects report the first page view.
    pub analytics: Analytics,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let analytics = props.analytics.clone();
    html! {
        <BrowserRouter>
            <AppDataProvider {analytics}>
                <Switch<Route> render={switch} />
            </AppDataProvider>
        </BrowserRouter>
    }
}
