//! Root component: router, transition store and overlay.

use mare_core::SiteConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::TransitionOverlay;
use crate::hooks::TransitionProvider;
use crate::pages::{HomePage, ModelPage, NotFoundPage, PanicPage};
use crate::routes::Route;

/// Route switch function.
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Model { id } => html! { <ModelPage {id} /> },
        Route::Panic => html! { <PanicPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Props for the App component.
#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

/// Main application component.
///
/// The overlay sits beside the route switch so it survives the navigation
/// it triggers.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <TransitionProvider config={props.config}>
                <Switch<Route> render={switch} />
                <TransitionOverlay />
            </TransitionProvider>
        </BrowserRouter>
    }
}
