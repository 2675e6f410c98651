//! Data model shared by every screen.
//!
//! All of these are immutable literals; screens keep their mutable
//! selections (likes, saves, filters, wizard answers) next to them rather
//! than inside them.

mod content;
mod conversation;
mod destination;
mod post;
mod profile;

pub use content::{Activity, Feature, Highlight, SafetyFeature, Stat, Trip};
pub use conversation::{Conversation, DeliveryStatus, Message, Sender};
pub use destination::{group_thousands, Category, Destination, PriceTier, Region};
pub use post::{Author, Post, Story};
pub use profile::{AccountType, Interest};
