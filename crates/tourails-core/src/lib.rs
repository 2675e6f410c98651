//! Tourails Core Library
//!
//! Renderer-free state and logic for the Tourails travel-social app.
//!
//! ## Overview
//!
//! Every screen of the app owns a small slice of local state seeded from
//! hard-coded mock data. This crate holds that state and the handful of
//! rules that operate on it, so the Dioxus layer only has to render:
//!
//! - **Explore**: destination filtering by query, region and category
//! - **Onboarding**: the gated four-step wizard
//! - **Community**: like/save toggle sets with a single source of truth
//! - **Signup**: password-strength heuristic and required-field validation
//! - **Messages**: conversation lookup/search and the composer draft
//! - **Safety**: privacy switches
//!
//! ## Quick Start
//!
//! ```
//! use tourails_core::explore::{CategoryFilter, DestinationFilter, RegionFilter};
//! use tourails_core::seed;
//!
//! let filter = DestinationFilter {
//!     query: "japan".into(),
//!     region: RegionFilter::All,
//!     category: CategoryFilter::All,
//! };
//! let hits = filter.apply(seed::destinations());
//! assert_eq!(hits[0].name, "Tokyo, Japan");
//! ```

pub mod chat;
pub mod error;
pub mod explore;
pub mod onboarding;
pub mod password;
pub mod safety;
pub mod seed;
pub mod selection;
pub mod shell;
pub mod signup;
pub mod types;

// Re-exports
pub use error::{TourError, TourResult};
pub use explore::{CategoryFilter, DestinationFilter, RegionFilter};
pub use onboarding::{Advance, OnboardingState, OnboardingStep, MAX_BIO_CHARS, MAX_INTERESTS};
pub use password::PasswordStrength;
pub use selection::{FeedEngagement, ToggleSet};
pub use shell::Theme;
pub use types::*;
