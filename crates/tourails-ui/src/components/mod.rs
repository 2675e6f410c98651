//! Reusable UI components.
//!
//! Class names resolve against the global stylesheet in the app crate.

mod button;
mod category_pills;
mod input;
mod logo;
mod password_meter;
mod toggle_switch;

pub use button::*;
pub use category_pills::*;
pub use input::*;
pub use logo::*;
pub use password_meter::*;
pub use toggle_switch::*;
