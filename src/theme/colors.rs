//! Palette constants.
//!
//! Mirrors the CSS custom properties in [`super::styles`] for the light
//! theme; the dark theme overrides them under `.dark`.

#![allow(dead_code)]

// === PRIMARY (Deep navy: headings, default buttons) ===
pub const NAVY: &str = "#12263f";
pub const NAVY_SOFT: &str = "#1f3b5c";

// === SECONDARY (Lagoon blue: links, selection, progress) ===
pub const LAGOON: &str = "#0ea5b7";
pub const LAGOON_GLOW: &str = "rgba(14, 165, 183, 0.3)";

// === ACCENT (Sunset coral: hero actions, likes, badges) ===
pub const CORAL: &str = "#ff6b4a";
pub const CORAL_GLOW: &str = "rgba(255, 107, 74, 0.35)";

// === SURFACES ===
pub const SAND: &str = "#f8f6f2";
pub const CARD: &str = "#ffffff";
pub const BORDER: &str = "#e4e1da";
pub const NIGHT: &str = "#0b1320";
pub const NIGHT_CARD: &str = "#131e30";

// === TEXT ===
pub const INK: &str = "#1b2330";
pub const INK_MUTED: &str = "#667085";

// === STRENGTH METER ===
pub const STRENGTH_WEAK: &str = "#ef4444";
pub const STRENGTH_FAIR: &str = "#f59e0b";
pub const STRENGTH_GOOD: &str = "#3b82f6";
pub const STRENGTH_STRONG: &str = "#22c55e";
