//! Runtime site configuration.
//!
//! `index.html` may carry a `<script id="mare-config" type="application/json">`
//! block; anything missing or invalid falls back to the defaults.

use mare_core::SiteConfig;

const CONFIG_ELEMENT_ID: &str = "mare-config";

/// Reads the embedded config block, falling back to defaults.
pub fn load() -> SiteConfig {
    let Some(raw) = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    if raw.trim().is_empty() {
        return SiteConfig::default();
    }

    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!("{err}; using default site config");
        SiteConfig::default()
    })
}
