//! Call-to-action band at the bottom of the home page.

use dioxus::prelude::*;
use tourails_ui::{Button, ButtonSize, ButtonVariant};

use crate::app::Route;

#[component]
pub fn CtaSection() -> Element {
    rsx! {
        section { class: "cta-section",
            div { class: "cta-backdrop" }
            div { class: "cta-orb cta-orb-right pulse" }
            div { class: "cta-orb cta-orb-left pulse-slow" }

            div { class: "container cta-content",
                div { class: "cta-badge fade-up",
                    span { class: "cta-badge-icon", "\u{2728}" }
                    span { "Start your journey today" }
                }
                h2 { class: "cta-title fade-up", "Ready to explore the world?" }
                p { class: "cta-lede fade-up",
                    "Join thousands of travelers discovering new destinations, making connections, "
                    "and creating memories that last a lifetime."
                }
                div { class: "cta-actions fade-up",
                    Link { to: Route::Signup {},
                        Button { variant: ButtonVariant::Accent, size: ButtonSize::Xl,
                            "Get Started Free"
                            span { class: "btn-arrow", "\u{2192}" }
                        }
                    }
                    Link { to: Route::Explore {},
                        Button {
                            variant: ButtonVariant::Glass,
                            size: ButtonSize::Xl,
                            class: "on-dark".to_string(),
                            "Browse Destinations"
                        }
                    }
                }
            }
        }
    }
}
