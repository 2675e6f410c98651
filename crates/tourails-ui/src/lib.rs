//! Tourails UI Components
//!
//! Presentational primitives shared by every screen. They hold no state of
//! their own beyond what the caller passes in; each maps a small set of
//! variants onto the class names defined in the app's global stylesheet.
//!
//! ## Palette
//!
//! - **Primary (deep navy)**: headings, default buttons
//! - **Secondary (lagoon blue)**: links, selected pills, progress
//! - **Accent (sunset coral)**: hero actions, likes, unread badges

pub mod components;

pub use components::*;
