//! Product detail page.

use mare_core::contact::SALES_WHATSAPP;
use mare_core::{Catalog, Choreography, Product, ScrollRange, Transform};
use yew::prelude::*;
use yew_icons::{Icon, IconData};
use yew_router::prelude::*;

use crate::components::{ContactButton, Layout, ScrollSection};
use crate::dom;
use crate::routes::Route;

/// Props for the ModelPage component.
#[derive(Properties, PartialEq)]
pub struct ModelPageProps {
    pub id: AttrValue,
}

/// Detail view for one catalog id. Unknown ids render an inline fallback
/// instead of the 404 page, since the URL shape itself is valid.
#[function_component(ModelPage)]
pub fn model_page(props: &ModelPageProps) -> Html {
    // New model, new page: start from the top
    use_effect_with(props.id.clone(), |_| {
        dom::scroll_to(0.0);
    });

    let content = match Catalog::bundled().get(&props.id) {
        Some(product) => html! { <ModelDetail product={product.clone()} /> },
        None => {
            tracing::debug!(id = %props.id, "unknown model id");
            html! { <ModelMissing /> }
        }
    };

    html! {
        <Layout>{ content }</Layout>
    }
}

#[derive(Properties, PartialEq)]
struct ModelDetailProps {
    product: Product,
}

fn gallery_choreography() -> Choreography {
    Choreography::new()
        .opacity(Transform::new(&[0.0, 0.4], &[0.0, 1.0]))
        .translate_y(Transform::new(&[0.0, 0.4], &[40.0, 0.0]))
}

#[function_component(ModelDetail)]
fn model_detail(props: &ModelDetailProps) -> Html {
    let product = &props.product;
    let variant = use_state(|| 0_usize);

    let hero_image = product.variant_image(*variant).to_string();

    html! {
        <article class="model-page">
            <Link<Route> to={Route::Home} classes="model-back">
                <Icon data={IconData::LUCIDE_ARROW_LEFT} width="18px" height="18px" />
                <span>{ "Todos os modelos" }</span>
            </Link<Route>>

            <header class="model-hero">
                <img class="model-hero-image" src={hero_image} alt={product.name.clone()} />
                <div class="model-hero-copy">
                    <span class="model-category">{ product.category.clone() }</span>
                    <h1 class="model-name">{ product.name.clone() }</h1>
                    <p class="model-tagline">{ product.tagline.clone() }</p>
                </div>
            </header>

            <section class="model-summary">
                <p>{ product.summary.clone() }</p>
                <ContactButton link={SALES_WHATSAPP} />
            </section>

            if !product.specs.is_empty() {
                <section class="model-specs">
                    <h2>{ "Ficha técnica" }</h2>
                    <dl>
                        { for product.specs.iter().map(|spec| html! {
                            <div class="model-spec" key={spec.label.clone()}>
                                <dt>{ spec.label.clone() }</dt>
                                <dd>{ spec.value.clone() }</dd>
                            </div>
                        }) }
                    </dl>
                </section>
            }

            if !product.color_variants.is_empty() {
                <section class="model-colors">
                    <h2>{ "Cores" }</h2>
                    <ul class="swatch-list">
                        { for product.color_variants.iter().enumerate().map(|(index, color)| {
                            let onclick = {
                                let variant = variant.clone();
                                Callback::from(move |_: MouseEvent| variant.set(index))
                            };
                            html! {
                                <li key={color.name.clone()}>
                                    <button
                                        class={classes!("swatch", (*variant == index).then_some("is-selected"))}
                                        style={format!("background-color: {}", color.swatch)}
                                        title={color.name.clone()}
                                        aria-label={color.name.clone()}
                                        {onclick}
                                    />
                                </li>
                            }
                        }) }
                    </ul>
                    if let Some(color) = product.color_variants.get(*variant) {
                        <p class="swatch-name">{ color.name.clone() }</p>
                    }
                </section>
            }

            if product.images.len() > 1 {
                <ScrollSection
                    class="model-gallery"
                    range={ScrollRange::ENTER}
                    choreography={gallery_choreography()}
                >
                    { for product.images.iter().skip(1).map(|src| html! {
                        <img key={src.clone()} src={src.clone()} alt={product.name.clone()} loading="lazy" />
                    }) }
                </ScrollSection>
            }
        </article>
    }
}

#[function_component(ModelMissing)]
fn model_missing() -> Html {
    html! {
        <section class="model-missing">
            <h1>{ "Modelo não encontrado" }</h1>
            <p>{ "Esse barco não está no nosso catálogo." }</p>
            <Link<Route> to={Route::Home} classes="btn-primary">{ "Ver todos os modelos" }</Link<Route>>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HostProps {
        id: AttrValue,
    }

    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        html! {
            <BrowserRouter>
                <ModelPage id={props.id.clone()} />
            </BrowserRouter>
        }
    }

    async fn mount(id: &'static str) -> web_sys::Element {
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        yew::Renderer::<Host>::with_root_and_props(root.clone(), HostProps { id: id.into() })
            .render();
        // Let the scheduler flush the first render
        yew::platform::time::sleep(Duration::from_millis(20)).await;
        root
    }

    #[wasm_bindgen_test]
    async fn test_unknown_id_renders_fallback() {
        let root = mount("unknown-id").await;
        assert!(root.query_selector(".model-missing").unwrap().is_some());
        assert!(root.query_selector(".model-page").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_known_id_renders_detail_with_first_variant() {
        let root = mount("pono").await;
        let name = root.query_selector(".model-name").unwrap().unwrap();
        assert_eq!(name.text_content().as_deref(), Some("PONO"));

        let hero = root.query_selector(".model-hero-image").unwrap().unwrap();
        assert_eq!(
            hero.get_attribute("src").as_deref(),
            Some("/assets/models/pono/sand.jpg")
        );
        assert!(root.query_selector(".model-missing").unwrap().is_none());
    }
}
