//! 404 page for paths outside the route table.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Layout;
use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <Layout>
            <section class="page not-found-page">
                <h1>{ "404" }</h1>
                <p>{ "Essa página se perdeu no mar." }</p>
                <Link<Route> to={Route::Home} classes="btn-primary">{ "Voltar ao início" }</Link<Route>>
            </section>
        </Layout>
    }
}
