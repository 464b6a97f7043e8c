//! Transition state store.
//!
//! Holds the single source of truth for cross-view transition intent. The
//! persisted fragments (intro flag, scroll offset) are written through to a
//! [`SessionStore`]; everything else resets on every load.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::session::SessionStore;

/// Session key for the "intro seen" flag.
pub const INTRO_SEEN_KEY: &str = "$mare$/session/intro-seen";

/// Session key for the saved catalog scroll offset.
pub const SCROLL_OFFSET_KEY: &str = "$mare$/session/scroll-offset";

/// Errors raised when reaching for the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("transition store used outside of a TransitionProvider")]
    OutsideProvider,
}

/// An in-flight transition: what was clicked and where it sat on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveTransition {
    /// Catalog id of the product being opened.
    pub target_id: String,
    pub name: String,
    pub image_url: String,
    /// On-screen rectangle of the clicked element.
    pub source_geometry: Rect,
}

impl ActiveTransition {
    pub fn new(
        target_id: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        source_geometry: Rect,
    ) -> Self {
        Self {
            target_id: target_id.into(),
            name: name.into(),
            image_url: image_url.into(),
            source_geometry,
        }
    }
}

/// Snapshot of the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionState {
    pub active: Option<ActiveTransition>,
    pub has_seen_intro: bool,
    pub saved_scroll_offset: u32,
}

impl TransitionState {
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    pub fn target_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.target_id.as_str())
    }

    pub fn source_geometry(&self) -> Option<Rect> {
        self.active.as_ref().map(|a| a.source_geometry)
    }
}

/// Mutable transition store backed by session storage.
///
/// Writes are synchronous and last-write-wins. Every change bumps
/// [`revision`](Self::revision); no-op calls leave it untouched.
#[derive(Debug)]
pub struct TransitionStore<S: SessionStore> {
    state: TransitionState,
    session: S,
    revision: u64,
}

impl<S: SessionStore> TransitionStore<S> {
    /// Creates the store, restoring persisted fragments from `session`.
    pub fn new(session: S) -> Self {
        let has_seen_intro = read_json::<bool>(&session, INTRO_SEEN_KEY).unwrap_or(false);
        let saved_scroll_offset = read_json::<u32>(&session, SCROLL_OFFSET_KEY).unwrap_or(0);

        tracing::debug!(
            has_seen_intro,
            saved_scroll_offset,
            "transition store restored from session"
        );

        Self {
            state: TransitionState {
                active: None,
                has_seen_intro,
                saved_scroll_offset,
            },
            session,
            revision: 0,
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Records transition intent.
    ///
    /// Only one transition may be in flight: a call made while another is
    /// active is ignored.
    pub fn start_transition(&mut self, transition: ActiveTransition) {
        if let Some(current) = &self.state.active {
            tracing::debug!(
                current = %current.target_id,
                ignored = %transition.target_id,
                "transition already in flight, ignoring start"
            );
            return;
        }
        tracing::info!(target_id = %transition.target_id, "transition started");
        self.state.active = Some(transition);
        self.bump();
    }

    /// Clears transition intent.
    pub fn end_transition(&mut self) {
        if let Some(previous) = self.state.active.take() {
            tracing::info!(target_id = %previous.target_id, "transition ended");
            self.bump();
        }
    }

    pub fn has_seen_intro(&self) -> bool {
        self.state.has_seen_intro
    }

    pub fn mark_intro_seen(&mut self) {
        if self.state.has_seen_intro {
            return;
        }
        self.state.has_seen_intro = true;
        write_json(&self.session, INTRO_SEEN_KEY, &true);
        self.bump();
    }

    pub fn save_scroll_offset(&mut self, offset: u32) {
        self.state.saved_scroll_offset = offset;
        write_json(&self.session, SCROLL_OFFSET_KEY, &offset);
        self.bump();
    }

    pub fn saved_scroll_offset(&self) -> u32 {
        self.state.saved_scroll_offset
    }

    pub fn clear_saved_scroll_offset(&mut self) {
        self.state.saved_scroll_offset = 0;
        if let Err(err) = self.session.remove(SCROLL_OFFSET_KEY) {
            tracing::warn!("failed to clear saved scroll offset: {err}");
        }
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn read_json<T: serde::de::DeserializeOwned>(session: &impl SessionStore, key: &str) -> Option<T> {
    let raw = session.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("ignoring unreadable session value for {key}: {err}");
            None
        }
    }
}

fn write_json<T: Serialize>(session: &impl SessionStore, key: &str, value: &T) {
    let Ok(json) = serde_json::to_string(value) else {
        return;
    };
    if let Err(err) = session.set(key, &json) {
        tracing::warn!("failed to persist {key}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySession, UnavailableSession};

    fn pono() -> ActiveTransition {
        ActiveTransition::new(
            "pono",
            "PONO",
            "/assets/pono/hero.jpg",
            Rect::new(100.0, 200.0, 320.0, 240.0),
        )
    }

    #[test]
    fn test_start_and_end_transition() {
        let mut store = TransitionStore::new(MemorySession::new());
        assert!(!store.is_transitioning());

        store.start_transition(pono());
        assert!(store.is_transitioning());
        assert_eq!(store.state().target_id(), Some("pono"));
        assert_eq!(
            store.state().source_geometry(),
            Some(Rect::new(100.0, 200.0, 320.0, 240.0))
        );

        store.end_transition();
        assert!(!store.is_transitioning());
        assert_eq!(store.state().target_id(), None);
    }

    #[test]
    fn test_second_start_is_ignored_while_active() {
        let mut store = TransitionStore::new(MemorySession::new());
        store.start_transition(pono());
        let revision = store.revision();

        store.start_transition(ActiveTransition::new("kai", "KAI", "", Rect::default()));

        assert_eq!(store.state().target_id(), Some("pono"));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_end_when_idle_does_not_bump_revision() {
        let mut store = TransitionStore::new(MemorySession::new());
        store.end_transition();
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_scroll_offset_round_trip() {
        let mut store = TransitionStore::new(MemorySession::new());
        store.save_scroll_offset(1834);
        assert_eq!(store.saved_scroll_offset(), 1834);

        store.clear_saved_scroll_offset();
        assert_eq!(store.saved_scroll_offset(), 0);
    }

    #[test]
    fn test_persisted_fragments_survive_reload() {
        let session = MemorySession::new();
        {
            let mut store = TransitionStore::new(session.clone());
            store.mark_intro_seen();
            store.save_scroll_offset(640);
            store.start_transition(pono());
        }

        // Same session, fresh page load
        let reloaded = TransitionStore::new(session);
        assert!(reloaded.has_seen_intro());
        assert_eq!(reloaded.saved_scroll_offset(), 640);
        assert!(!reloaded.is_transitioning());
    }

    #[test]
    fn test_cleared_offset_is_not_restored() {
        let session = MemorySession::new();
        let mut store = TransitionStore::new(session.clone());
        store.save_scroll_offset(90);
        store.clear_saved_scroll_offset();

        assert_eq!(TransitionStore::new(session).saved_scroll_offset(), 0);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_defaults() {
        let mut store = TransitionStore::new(UnavailableSession);
        assert!(!store.has_seen_intro());
        assert_eq!(store.saved_scroll_offset(), 0);

        // Writes fail silently but in-memory state still updates
        store.mark_intro_seen();
        store.save_scroll_offset(12);
        assert!(store.has_seen_intro());
        assert_eq!(store.saved_scroll_offset(), 12);
    }

    #[test]
    fn test_garbage_session_values_read_as_defaults() {
        let session = MemorySession::new();
        session.set(INTRO_SEEN_KEY, "yes please").unwrap();
        session.set(SCROLL_OFFSET_KEY, "-40").unwrap();

        let store = TransitionStore::new(session);
        assert!(!store.has_seen_intro());
        assert_eq!(store.saved_scroll_offset(), 0);
    }
}
