//! Maré Core Library
//!
//! Platform-free logic behind the Maré website:
//! - Transition store and the dive-transition state machine
//! - Scroll choreography (progress and derived visual values)
//! - Static product catalog and site configuration
//!
//! Nothing in here touches the DOM, so every piece is testable natively.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod animator;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod easing;
pub mod geometry;
pub mod routes;
pub mod scroll;
pub mod session;
pub mod store;

pub use animator::{AnimatorEffect, GhostView, OverlayView, Phase, PhaseToken, TransitionAnimator};
pub use catalog::{Catalog, CatalogError, ColorVariant, Product, Spec};
pub use config::{Breakpoints, ConfigError, IntroConfig, SiteConfig, TransitionTimings};
pub use contact::ContactLink;
pub use easing::Easing;
pub use geometry::{Breakpoint, Morph, Rect, Viewport};
pub use scroll::{
    Choreography, Intersection, ProgressTracker, ScrollRange, SectionGeometry, Transform,
    VisualStyle, scroll_progress,
};
pub use session::{MemorySession, SessionStore, StorageError, UnavailableSession};
pub use store::{ActiveTransition, StoreError, TransitionState, TransitionStore};
