//! Small DOM readers shared by hooks and components.

use mare_core::{Rect, SectionGeometry, Viewport};
use yew::NodeRef;

pub fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Scrolls the element with the given id into view, if it is mounted.
pub fn scroll_to_anchor(id: &str) {
    if let Some(element) = gloo::utils::document().get_element_by_id(id) {
        element.scroll_into_view();
    }
}

/// Fragment of the current URL, without the leading `#`.
pub fn location_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let anchor = hash.trim_start_matches('#');
    (!anchor.is_empty()).then(|| anchor.to_string())
}

/// Rewrites the URL fragment in place: no history entry, no router event.
pub fn replace_hash(anchor: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    // Keep the router's state object
    let state = history.state().unwrap_or(wasm_bindgen::JsValue::NULL);
    let path = window.location().pathname().unwrap_or_default();
    let url = format!("{path}#{anchor}");
    if let Err(err) = history.replace_state_with_url(&state, "", Some(&url)) {
        tracing::warn!(?err, "failed to update the URL fragment");
    }
}

/// Viewport-relative rectangle of the referenced element.
pub fn client_rect(node: &NodeRef) -> Option<Rect> {
    let element = node.cast::<web_sys::Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

/// Document-relative vertical layout of the referenced element.
pub fn section_geometry(node: &NodeRef) -> Option<SectionGeometry> {
    let rect = client_rect(node)?;
    Some(SectionGeometry::new(rect.y + scroll_y(), rect.height))
}
