//! Catalog card that starts the dive transition.

use mare_core::Product;
use yew::prelude::*;

use crate::dom;
use crate::hooks::use_transition;

/// Props for the ProductCard component.
#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

/// Product card. Clicking it records the scroll position and hands the card's
/// on-screen rectangle to the transition store; the overlay does the rest.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let ctx = use_transition();
    let image_ref = use_node_ref();
    let product = &props.product;
    let busy = ctx.is_transitioning();

    let onclick = {
        let handle = ctx.handle();
        let image_ref = image_ref.clone();
        let id = product.id.clone();
        let name = product.name.clone();
        let image = product.cover_image().to_string();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // Re-entrant clicks are ignored while a transition runs
            if handle.is_transitioning() {
                return;
            }
            let Some(rect) = dom::client_rect(&image_ref) else {
                tracing::warn!(%id, "card image not mounted, skipping transition");
                return;
            };
            handle.save_scroll_offset();
            handle.start_transition(&id, &name, &image, rect);
        })
    };

    html! {
        <article class={classes!("product-card", busy.then_some("is-disabled"))}>
            <a href={mare_core::routes::model_path(&product.id)} {onclick}>
                <div class="product-card-media" ref={image_ref}>
                    <img src={product.cover_image().to_string()} alt={product.name.clone()} loading="lazy" />
                </div>
                <div class="product-card-body">
                    <span class="product-card-category">{ product.category.clone() }</span>
                    <h3 class="product-card-name">{ product.name.clone() }</h3>
                    <p class="product-card-tagline">{ product.tagline.clone() }</p>
                </div>
            </a>
        </article>
    }
}
