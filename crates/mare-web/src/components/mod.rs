//! UI components for the Maré website.

mod contact_button;
mod intro_loader;
mod layout;
mod product_card;
mod scroll_section;
mod transition_overlay;

pub use contact_button::ContactButton;
pub use intro_loader::IntroLoader;
pub use layout::Layout;
pub use product_card::ProductCard;
pub use scroll_section::ScrollSection;
pub use transition_overlay::TransitionOverlay;
