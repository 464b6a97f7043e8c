//! Intro loader shown once per browser session.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_transition;

/// How long before the end the loader starts fading out.
const FADE_OUT_MS: u32 = 500;

/// Brand loader covering the landing page on the first visit of a session.
///
/// Renders nothing once the intro has been seen, including after a reload in
/// the same session.
#[function_component(IntroLoader)]
pub fn intro_loader() -> Html {
    let ctx = use_transition();
    let leaving = use_state(|| false);

    let intro = ctx.config.intro;
    let skip = !intro.is_visible(ctx.has_seen_intro());

    {
        let handle = ctx.handle();
        let leaving = leaving.clone();
        use_effect_with(skip, move |skip| {
            let timers = (!*skip).then(|| {
                let fade = Timeout::new(intro.duration_ms.saturating_sub(FADE_OUT_MS), move || {
                    leaving.set(true);
                });
                let done = Timeout::new(intro.duration_ms, move || {
                    tracing::debug!("intro finished");
                    handle.mark_intro_seen();
                });
                (fade, done)
            });
            move || drop(timers)
        });
    }

    if skip {
        return html! {};
    }

    html! {
        <div class={classes!("intro-loader", (*leaving).then_some("is-leaving"))}>
            <div class="intro-wave" />
            <h1 class="intro-wordmark">{ "Maré" }</h1>
            <p class="intro-caption">{ "Estaleiro desde 1987" }</p>
        </div>
    }
}
