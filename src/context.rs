//! Context accessors for Tourails.
//!
//! The only state shared across screens is the theme signal, provided by
//! [`crate::app::App`]. Launch settings come from the command line.
//!
//! ## Usage
//!
//! ```ignore
//! let mut theme = use_theme();
//! theme.set(theme().toggled());
//! ```

use dioxus::prelude::*;
use tourails_core::Theme;

use crate::AppConfig;

/// Launch settings parsed in `main`.
pub fn get_config() -> AppConfig {
    crate::get_config()
}

/// Hook to access the app-wide theme signal.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}
