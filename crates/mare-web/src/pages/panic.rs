//! Panic page shown after a WASM panic.

use mare_core::SessionStore;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::BrowserSession;

const PANIC_INFO_KEY: &str = "$mare$/session/panic";
const PANIC_PATH: &str = "/panic";

fn panic_report(info: &std::panic::PanicHookInfo<'_>) -> String {
    let location = info.location().map_or_else(
        || "unknown location".to_string(),
        |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
    );
    format!("{info}\n\nLocation: {location}")
}

/// Installs a panic hook that logs through `console_error_panic_hook`, keeps
/// the report in session storage and sends the browser to the panic page.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);

        if let Err(err) = BrowserSession.set(PANIC_INFO_KEY, &panic_report(info)) {
            web_sys::console::warn_1(&format!("panic report not saved: {err}").into());
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        // Panicking while rendering the panic page must not loop
        if location.pathname().is_ok_and(|path| path == PANIC_PATH) {
            return;
        }
        let _ = location.set_pathname(PANIC_PATH);
    }));
}

#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let report = use_state(|| BrowserSession.get(PANIC_INFO_KEY));

    let on_clear = {
        let report = report.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = BrowserSession.remove(PANIC_INFO_KEY) {
                tracing::warn!("failed to clear panic report: {err}");
            }
            report.set(None);
        })
    };

    let on_copy = {
        let text = (*report).clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(text), Some(window)) = (text.as_deref(), web_sys::window()) else {
                return;
            };
            // The returned promise is not awaited; the copy is best effort
            let _ = window.navigator().clipboard().write_text(text);
        })
    };

    html! {
        <main class="page panic-page">
            <div class="panic-container">
                <h1>{ "Algo deu errado" }</h1>
                <p class="panic-description">
                    { "O site encontrou um erro inesperado." }
                </p>

                if let Some(text) = &*report {
                    <div class="panic-info-box">
                        <pre class="panic-details">{ text }</pre>
                        <div class="panic-actions">
                            <button onclick={on_copy} class="btn-secondary">{ "Copiar" }</button>
                            <button onclick={on_clear} class="btn-secondary">{ "Apagar" }</button>
                        </div>
                    </div>
                } else {
                    <p class="panic-cleared">{ "Nenhum detalhe de erro disponível." }</p>
                }

                <Link<Route> to={Route::Home} classes="btn-primary">
                    { "Voltar ao início" }
                </Link<Route>>
            </div>
        </main>
    }
}
