//! Page components.

mod home;
mod model;
mod not_found;
mod panic;

pub use home::HomePage;
pub use model::ModelPage;
pub use not_found::NotFoundPage;
pub use panic::{PanicPage, set_panic_hook};
