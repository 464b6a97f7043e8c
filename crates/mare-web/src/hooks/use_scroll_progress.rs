//! Scroll progress of a section.

use std::rc::Rc;

use gloo::events::EventListener;
use mare_core::{ProgressTracker, ScrollRange, scroll_progress};
use yew::prelude::*;

use crate::dom;

/// Progress (0..=1) of the referenced element through `range`.
///
/// Recomputed from scratch on every `scroll` and `resize` event; the caller
/// re-renders only when the quantized value changes.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state(|| 0.0_f64);
    let tracker = use_mut_ref(ProgressTracker::new);

    {
        let progress = progress.clone();
        use_effect_with((node, range), move |(node, range)| {
            let node = node.clone();
            let range = *range;
            let measure = Rc::new(move || {
                let Some(section) = dom::section_geometry(&node) else {
                    return;
                };
                let value =
                    scroll_progress(dom::scroll_y(), dom::viewport().height, section, range);
                let changed = tracker.borrow_mut().update(value);
                if let Some(value) = changed {
                    progress.set(value);
                }
            });

            measure();

            let window = gloo::utils::window();
            let on_scroll = {
                let measure = Rc::clone(&measure);
                EventListener::new(&window, "scroll", move |_| measure())
            };
            let on_resize = EventListener::new(&window, "resize", move |_| measure());

            move || {
                drop(on_scroll);
                drop(on_resize);
            }
        });
    }

    *progress
}
