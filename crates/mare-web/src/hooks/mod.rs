mod use_dive_transition;
mod use_scroll_progress;
mod use_transition;

pub use use_dive_transition::use_dive_transition;
pub use use_scroll_progress::use_scroll_progress;
pub use use_transition::*;
