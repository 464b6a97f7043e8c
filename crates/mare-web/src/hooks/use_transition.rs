//! Transition store provider and hook.
//!
//! The store is one `Rc<RefCell<_>>` shared by the whole view tree. Mutations
//! go through [`TransitionHandle`], which re-renders the provider only when
//! the store revision actually moved; consumers then see a new
//! [`TransitionContext`] and re-render in turn.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use mare_core::{ActiveTransition, Rect, SiteConfig, StoreError, TransitionState, TransitionStore};
use yew::prelude::*;

use crate::dom;
use crate::session::BrowserSession;

type SharedStore = Rc<RefCell<TransitionStore<BrowserSession>>>;

/// Stable handle to the shared store.
#[derive(Clone)]
pub struct TransitionHandle {
    store: SharedStore,
    notify: Callback<()>,
}

impl TransitionHandle {
    pub fn state(&self) -> TransitionState {
        self.store.borrow().state().clone()
    }

    pub fn is_transitioning(&self) -> bool {
        self.store.borrow().is_transitioning()
    }

    pub fn start_transition(&self, id: &str, name: &str, image_url: &str, geometry: Rect) {
        let transition = ActiveTransition::new(id, name, image_url, geometry);
        self.mutate(|store| store.start_transition(transition));
    }

    pub fn end_transition(&self) {
        self.mutate(TransitionStore::end_transition);
    }

    pub fn has_seen_intro(&self) -> bool {
        self.store.borrow().has_seen_intro()
    }

    pub fn mark_intro_seen(&self) {
        self.mutate(TransitionStore::mark_intro_seen);
    }

    /// Saves the current window scroll position.
    pub fn save_scroll_offset(&self) {
        let offset = scroll_offset_px(dom::scroll_y());
        self.mutate(|store| store.save_scroll_offset(offset));
    }

    pub fn saved_scroll_offset(&self) -> u32 {
        self.store.borrow().saved_scroll_offset()
    }

    pub fn clear_saved_scroll_offset(&self) {
        self.mutate(TransitionStore::clear_saved_scroll_offset);
    }

    fn mutate(&self, f: impl FnOnce(&mut TransitionStore<BrowserSession>)) {
        let changed = {
            let mut store = self.store.borrow_mut();
            let before = store.revision();
            f(&mut store);
            store.revision() != before
        };
        if changed {
            self.notify.emit(());
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scroll_offset_px(scroll_y: f64) -> u32 {
    if scroll_y.is_finite() && scroll_y > 0.0 {
        scroll_y.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Context value seen by consumers.
#[derive(Clone)]
pub struct TransitionContext {
    handle: TransitionHandle,
    revision: u64,
    pub config: SiteConfig,
}

impl TransitionContext {
    pub fn handle(&self) -> TransitionHandle {
        self.handle.clone()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Deref for TransitionContext {
    type Target = TransitionHandle;

    fn deref(&self) -> &Self::Target {
        &self.handle
    }
}

impl PartialEq for TransitionContext {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
            && self.config == other.config
            && Rc::ptr_eq(&self.handle.store, &other.handle.store)
    }
}

/// Props for TransitionProvider.
#[derive(Properties, PartialEq)]
pub struct TransitionProviderProps {
    pub children: Children,
    #[prop_or_default]
    pub config: SiteConfig,
}

/// Owns the transition store for everything below it.
#[function_component(TransitionProvider)]
pub fn transition_provider(props: &TransitionProviderProps) -> Html {
    let store = use_mut_ref(|| TransitionStore::new(BrowserSession));
    let trigger = use_force_update();

    let handle = TransitionHandle {
        store: store.clone(),
        notify: Callback::from(move |()| trigger.force_update()),
    };
    let context = TransitionContext {
        revision: store.borrow().revision(),
        handle,
        config: props.config,
    };

    html! {
        <ContextProvider<TransitionContext> context={context}>
            { props.children.clone() }
        </ContextProvider<TransitionContext>>
    }
}

/// Transition context, or an error when no provider is mounted above.
#[hook]
pub fn use_try_transition() -> Result<TransitionContext, StoreError> {
    use_context::<TransitionContext>().ok_or(StoreError::OutsideProvider)
}

/// Transition context.
///
/// # Panics
///
/// Panics when no `TransitionProvider` is mounted above the caller. That is
/// a wiring mistake, not a runtime condition.
#[hook]
pub fn use_transition() -> TransitionContext {
    use_try_transition().unwrap_or_else(|err| {
        tracing::error!("{err}");
        panic!("{err}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_scroll_offset_px() {
        assert_eq!(scroll_offset_px(0.0), 0);
        assert_eq!(scroll_offset_px(-12.0), 0);
        assert_eq!(scroll_offset_px(f64::NAN), 0);
        assert_eq!(scroll_offset_px(1834.4), 1834);
        assert_eq!(scroll_offset_px(1834.6), 1835);
    }
}
