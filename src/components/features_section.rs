//! Features Section Component
//!
//! "Why Tourails" grid on the home page. Cards fade up one after another.

use dioxus::prelude::*;
use tourails_core::{seed, Feature};

/// Stagger between consecutive cards, in seconds
const STAGGER_SECS: f32 = 0.1;

pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f32 * STAGGER_SECS)
}

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { class: "features-section",
            div { class: "section-rule top" }
            div { class: "container",
                div { class: "section-heading fade-up",
                    span { class: "eyebrow", "Why Tourails" }
                    h2 { class: "section-title",
                        "Everything you need to"
                        br {}
                        span { class: "gradient-text", "travel smarter" }
                    }
                    p { class: "section-lede",
                        "From planning to sharing, we've got every aspect of your journey covered."
                    }
                }
                div { class: "features-grid",
                    for (index, feature) in seed::home_features().iter().enumerate() {
                        FeatureCard { key: "{feature.title}", feature: feature.clone(), index }
                    }
                }
            }
            div { class: "section-rule bottom" }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> Element {
    rsx! {
        div { class: "feature-card glass-card fade-up", style: stagger_style(index),
            div { class: "feature-icon", "{feature.icon}" }
            h3 { class: "feature-title", "{feature.title}" }
            p { class: "feature-description", "{feature.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_staggered() {
        assert_eq!(stagger_style(0), "animation-delay: 0.0s");
        assert_eq!(stagger_style(3), "animation-delay: 0.3s");
    }
}
