//! Application routes.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    /// Catalog / landing page.
    #[at("/")]
    Home,
    /// Product detail by catalog id.
    #[at("/modelo/:id")]
    Model { id: String },
    /// Shown after a WASM panic.
    #[at("/panic")]
    Panic,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
