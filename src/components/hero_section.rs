//! Hero Section Component
//!
//! Full-height opening banner of the home page.

use dioxus::prelude::*;
use tourails_core::seed;
use tourails_ui::{Button, ButtonSize, ButtonVariant};

use crate::app::Route;

#[component]
pub fn HeroSection() -> Element {
    let catalog = seed::destinations();
    let backdrop = catalog.first().map(|d| d.image.clone()).unwrap_or_default();

    rsx! {
        section { class: "hero-section",
            div { class: "hero-backdrop", style: "background-image: url('{backdrop}')" }
            div { class: "hero-overlay" }

            div { class: "container hero-content",
                span { class: "hero-kicker fade-up", "\u{1F30F} Your next adventure starts here" }
                h1 { class: "hero-title fade-up",
                    "Travel. Connect."
                    br {}
                    span { class: "gradient-text", "Share the journey." }
                }
                p { class: "hero-lede fade-up",
                    "Discover breathtaking destinations, meet fellow travelers and share the "
                    "stories that make every trip unforgettable."
                }
                div { class: "hero-actions fade-up",
                    Link { to: Route::Signup {},
                        Button { variant: ButtonVariant::Hero, size: ButtonSize::Xl, "Start Exploring" }
                    }
                    Link { to: Route::Community {},
                        Button { variant: ButtonVariant::HeroOutline, size: ButtonSize::Xl, "See the Community" }
                    }
                }
                div { class: "hero-stats fade-up",
                    HeroStat { value: "50K+", label: "Travelers" }
                    HeroStat { value: "195+", label: "Countries" }
                    HeroStat { value: "{catalog.len()}", label: "Featured spots" }
                }
            }
        }
    }
}

#[component]
fn HeroStat(value: String, label: String) -> Element {
    rsx! {
        div { class: "hero-stat",
            span { class: "hero-stat-value", "{value}" }
            span { class: "hero-stat-label", "{label}" }
        }
    }
}
