//! Full-screen cover and ghost element for the dive transition.

use yew::prelude::*;

use crate::hooks::use_dive_transition;

/// Overlay painted above every route while a dive transition runs.
///
/// Stays mounted for the app's lifetime so the cover can fade in from
/// transparent and the phase timers survive the route swap.
#[function_component(TransitionOverlay)]
pub fn transition_overlay() -> Html {
    let view = use_dive_transition();
    let visible = view.is_visible();

    let cover_style = format!(
        "opacity: {:.3}; transition: opacity {}ms ease; pointer-events: {};",
        view.cover_opacity,
        view.cover_fade_ms,
        if visible { "auto" } else { "none" }
    );

    let ghost = view.ghost.map(|ghost| {
        let style = format!(
            "{} opacity: {:.3}; transition: opacity {}ms ease;",
            ghost.rect.to_css(),
            ghost.opacity,
            view.cover_fade_ms
        );
        html! {
            <div class="dive-ghost" style={style}>
                <img src={ghost.image_url} alt={ghost.name.clone()} />
                <span class="dive-ghost-label">{ ghost.name }</span>
            </div>
        }
    });

    html! {
        <div class={classes!("dive-overlay", visible.then_some("is-active"))} aria-hidden="true">
            <div class="dive-cover" style={cover_style} />
            { for ghost }
        </div>
    }
}
