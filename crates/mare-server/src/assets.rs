//! Embedded static bundle with SPA fallback.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use http::header;
use rust_embed::Embed;

const INDEX: &str = "index.html";

/// Embedded static files from the trunk `dist/` directory.
#[derive(Embed)]
#[folder = "../../dist/"]
#[allow_missing = true]
struct Assets;

/// How a request path maps onto the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Serve this file.
    File(&'a str),
    /// A client-side route; serve `index.html`.
    Route,
}

/// Classifies a request path. Paths whose last segment has an extension are
/// files; everything else is left to the client router.
pub fn classify(path: &str) -> Lookup<'_> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return Lookup::File(INDEX);
    }
    let last = path.rsplit('/').next().unwrap_or(path);
    if last.contains('.') && !path.split('/').any(|segment| segment == "..") {
        Lookup::File(path)
    } else {
        Lookup::Route
    }
}

/// Cache policy: trunk fingerprints the wasm/js/css it emits, the shell must
/// always be revalidated.
pub fn cache_control(path: &str) -> &'static str {
    if path == INDEX {
        "no-cache"
    } else if is_fingerprinted(path) {
        "public, max-age=31536000, immutable"
    } else {
        "public, max-age=3600"
    }
}

/// Trunk names its outputs `<name>-<16 hex>.<ext>` (`_bg` before the
/// extension for the wasm module).
fn is_fingerprinted(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = file.split('.').next().unwrap_or(file);
    let stem = stem.strip_suffix("_bg").unwrap_or(stem);
    stem.rsplit_once('-').is_some_and(|(_, hash)| {
        hash.len() == 16 && hash.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

pub fn has_index() -> bool {
    Assets::get(INDEX).is_some()
}

fn file_response(path: &str) -> Option<Response> {
    let content = Assets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            [
                (header::CONTENT_TYPE, mime.as_ref()),
                (header::CACHE_CONTROL, cache_control(path)),
            ],
            content.data.into_owned(),
        )
            .into_response(),
    )
}

/// Fallback handler for every request.
pub async fn serve_embedded(uri: Uri) -> Response {
    match classify(uri.path()) {
        Lookup::File(path) => file_response(path).unwrap_or_else(|| {
            tracing::debug!(path, "asset not found");
            StatusCode::NOT_FOUND.into_response()
        }),
        Lookup::Route => file_response(INDEX).unwrap_or_else(|| {
            tracing::warn!("index.html missing from the embedded bundle");
            StatusCode::NOT_FOUND.into_response()
        }),
    }
}
