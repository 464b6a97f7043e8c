//! Landing page: hero, model catalog and brand story.

use gloo::timers::callback::Timeout;
use mare_core::contact::SALES_WHATSAPP;
use mare_core::{Catalog, Choreography, Easing, ScrollRange, Transform};
use yew::prelude::*;

use crate::components::{ContactButton, IntroLoader, Layout, ProductCard, ScrollSection};
use crate::dom;
use crate::hooks::use_transition;

/// Delay before restoring the catalog scroll position, so the grid has laid out.
const SCROLL_RESTORE_DELAY_MS: u32 = 50;

struct Chapter {
    id: &'static str,
    kicker: &'static str,
    title: &'static str,
    body: &'static str,
    image: &'static str,
}

const CHAPTERS: &[Chapter] = &[
    Chapter {
        id: "estaleiro",
        kicker: "O estaleiro",
        title: "Feitos à mão, na beira do mar.",
        body: "Cada casco nasce em Florianópolis, laminado à mão por uma equipe que cresceu entre marés e ventos sul.",
        image: "/assets/story/workshop.jpg",
    },
    Chapter {
        id: "materiais",
        kicker: "Materiais",
        title: "Resina, fibra e paciência.",
        body: "Usamos infusão a vácuo e reforços em fibra de carbono onde o barco trabalha mais. O resto é acabamento sem pressa.",
        image: "/assets/story/materials.jpg",
    },
    Chapter {
        id: "entrega",
        kicker: "Entrega",
        title: "Seu barco, seu primeiro dia de mar.",
        body: "Acompanhamos a primeira saída de cada dono. Só entregamos as chaves quando o barco já parece seu.",
        image: "/assets/story/delivery.jpg",
    },
];

fn hero_choreography() -> Choreography {
    Choreography::new()
        .scale(Transform::new(&[0.0, 1.0], &[1.0, 1.25]).with_easing(Easing::EaseInCubic))
        .opacity(Transform::new(&[0.0, 0.7, 1.0], &[1.0, 1.0, 0.0]))
        .translate_y(Transform::new(&[0.0, 1.0], &[0.0, -120.0]))
}

fn chapter_choreography(index: usize) -> Choreography {
    // Alternate the side chapters slide in from
    let offset = if index % 2 == 0 { -60.0 } else { 60.0 };
    Choreography::new()
        .opacity(Transform::new(&[0.0, 0.25, 0.75, 1.0], &[0.0, 1.0, 1.0, 0.0]))
        .translate_x(Transform::new(&[0.0, 0.35], &[offset, 0.0]).with_easing(Easing::EaseOutCubic))
        .translate_y(Transform::new(&[0.0, 0.35], &[80.0, 0.0]).with_easing(Easing::EaseOutCubic))
}

fn catalog_choreography() -> Choreography {
    Choreography::new()
        .opacity(Transform::new(&[0.0, 0.3], &[0.0, 1.0]))
        .scale(Transform::new(&[0.0, 0.3], &[0.96, 1.0]))
}

/// Landing page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_transition();

    // A section anchor in the URL wins; otherwise coming back from a detail
    // view puts the catalog where the user left it
    {
        let handle = ctx.handle();
        use_effect_with((), move |_| {
            let offset = handle.saved_scroll_offset();
            let restore = match dom::location_hash() {
                Some(anchor) => Some(Timeout::new(SCROLL_RESTORE_DELAY_MS, move || {
                    tracing::debug!(%anchor, "scrolling to section");
                    dom::scroll_to_anchor(&anchor);
                    handle.clear_saved_scroll_offset();
                })),
                None => (offset > 0).then(|| {
                    Timeout::new(SCROLL_RESTORE_DELAY_MS, move || {
                        tracing::debug!(offset, "restoring catalog scroll position");
                        dom::scroll_to(f64::from(offset));
                        handle.clear_saved_scroll_offset();
                    })
                }),
            };
            move || drop(restore)
        });
    }

    let products = Catalog::bundled().products();

    html! {
        <>
            <IntroLoader />
            <Layout overlay_header={true}>
                <ScrollSection
                    class="hero"
                    range={ScrollRange::PINNED}
                    choreography={hero_choreography()}
                >
                    <div class="hero-media">
                        <img src="/assets/hero/open-sea.jpg" alt="Barco Maré em mar aberto" />
                    </div>
                    <div class="hero-copy">
                        <h1 class="hero-title">{ "O mar, do jeito que ele merece." }</h1>
                        <p class="hero-subtitle">{ "Lanchas, veleiros e catamarãs construídos à mão no sul do Brasil." }</p>
                    </div>
                </ScrollSection>

                <ScrollSection
                    id="modelos"
                    class="catalog"
                    range={ScrollRange::ENTER}
                    choreography={catalog_choreography()}
                >
                    <h2 class="section-title">{ "Modelos" }</h2>
                    <div class="product-grid">
                        { for products.iter().map(|product| html! {
                            <ProductCard key={product.id.clone()} product={product.clone()} />
                        }) }
                    </div>
                </ScrollSection>

                { for CHAPTERS.iter().enumerate().map(|(index, chapter)| html! {
                    <ScrollSection
                        key={chapter.id}
                        id={chapter.id}
                        class={classes!("story-chapter", (index % 2 == 1).then_some("is-reversed"))}
                        choreography={chapter_choreography(index)}
                    >
                        <img class="story-image" src={chapter.image} alt={chapter.title} loading="lazy" />
                        <div class="story-copy">
                            <span class="story-kicker">{ chapter.kicker }</span>
                            <h2 class="story-title">{ chapter.title }</h2>
                            <p class="story-body">{ chapter.body }</p>
                        </div>
                    </ScrollSection>
                }) }

                <section class="contact-cta">
                    <h2>{ "Vamos para a água?" }</h2>
                    <p>{ "Agende uma visita ao estaleiro ou um test-drive." }</p>
                    <ContactButton link={SALES_WHATSAPP} class="is-large" />
                </section>
            </Layout>
        </>
    }
}
