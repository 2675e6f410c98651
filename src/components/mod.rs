//! App-level components for Tourails.
//!
//! Primitives (buttons, inputs, pills) live in `tourails-ui`; these are
//! the composite pieces the screens are built from.

mod cta_section;
mod destination_card;
mod features_section;
mod footer;
mod hero_section;
pub mod images;
pub mod messages;
mod navbar;
pub mod onboarding;
mod post_card;
mod sidebar;
mod story_strip;

pub use cta_section::CtaSection;
pub use destination_card::DestinationCard;
pub use features_section::FeaturesSection;
pub use footer::Footer;
pub use hero_section::HeroSection;
pub use navbar::{NavLink, Navbar};
pub use post_card::PostCard;
pub use sidebar::{sidebar_width, Sidebar, SidebarItem};
pub use story_strip::StoryStrip;
