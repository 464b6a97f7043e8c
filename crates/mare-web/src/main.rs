//! Maré Website Client
//!
//! Yew WASM frontend application.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "mare-web only supports wasm32 target. Use: cargo check -p mare-web --target wasm32-unknown-unknown"
);

mod app;
mod components;
mod config;
mod dom;
mod hooks;
mod pages;
mod routes;
mod session;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    // Panics land on /panic with the message kept in session storage
    pages::set_panic_hook();

    let filter = EnvFilter::new("info,mare_core=info,mare_web=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    let config = config::load();
    tracing::info!(?config, "starting Maré website");

    yew::Renderer::<App>::with_props(app::AppProps { config }).render();
}
