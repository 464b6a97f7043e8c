//! Page chrome: header and footer.

use mare_core::contact::FOOTER_LINKS;
use mare_core::routes::section_href;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom;
use crate::routes::Route;

/// Landing page sections reachable from the header.
const SECTIONS: &[(&str, &str)] = &[
    ("modelos", "Modelos"),
    ("estaleiro", "Estaleiro"),
    ("contato", "Contato"),
];

#[derive(Properties, PartialEq)]
struct SectionLinkProps {
    anchor: &'static str,
    label: &'static str,
}

/// Header link to a landing page section. Navigates through the router, so
/// following it from a detail view never reloads the document; the landing
/// page scrolls to the anchor once it has mounted.
#[function_component(SectionLink)]
fn section_link(props: &SectionLinkProps) -> Html {
    let navigator = use_navigator();
    let on_home = use_route::<Route>() == Some(Route::Home);

    let onclick = {
        let anchor = props.anchor;
        Callback::from(move |e: MouseEvent| {
            // Without a router the plain href still works
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            e.prevent_default();
            if on_home {
                dom::scroll_to_anchor(anchor);
            } else {
                navigator.push(&Route::Home);
            }
            dom::replace_hash(anchor);
        })
    };

    html! {
        <a href={section_href(props.anchor)} {onclick}>{ props.label }</a>
    }
}

/// Props for the Layout component.
#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    /// Child content to render.
    pub children: Html,
    /// Transparent header over a full-bleed hero.
    #[prop_or(false)]
    pub overlay_header: bool,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-layout">
            <header class={classes!("site-header", props.overlay_header.then_some("is-overlay"))}>
                <Link<Route> to={Route::Home} classes="site-logo">{ "Maré" }</Link<Route>>
                <nav class="site-nav">
                    { for SECTIONS.iter().map(|&(anchor, label)| html! {
                        <SectionLink key={anchor} {anchor} {label} />
                    }) }
                </nav>
            </header>

            <main class="app-main">
                { props.children.clone() }
            </main>

            <footer class="site-footer" id="contato">
                <p class="site-footer-brand">{ "Maré Boats · Florianópolis, SC" }</p>
                <ul class="site-footer-links">
                    { for FOOTER_LINKS.iter().map(|link| html! {
                        <li>
                            <a href={link.href} target="_blank" rel="noopener noreferrer">
                                { link.label }
                            </a>
                        </li>
                    }) }
                </ul>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(Host)]
    fn host() -> Html {
        html! {
            <BrowserRouter>
                <Layout>
                    <p>{ "detail" }</p>
                </Layout>
            </BrowserRouter>
        }
    }

    #[wasm_bindgen_test]
    async fn test_section_link_navigates_in_place_from_detail_view() {
        let window = gloo::utils::window();
        window
            .history()
            .unwrap()
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some("/modelo/pono"))
            .unwrap();

        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        yew::Renderer::<Host>::with_root(root.clone()).render();
        yew::platform::time::sleep(Duration::from_millis(20)).await;

        let link = root
            .query_selector(r#".site-nav a[href="/#modelos"]"#)
            .unwrap()
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap();
        link.click();
        yew::platform::time::sleep(Duration::from_millis(20)).await;

        // Still the same document: the router moved to / and only the hash changed
        let location = window.location();
        assert_eq!(location.pathname().unwrap(), "/");
        assert_eq!(location.hash().unwrap(), "#modelos");
        assert!(root.query_selector(".site-header").unwrap().is_some());
    }
}
