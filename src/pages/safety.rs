//! Safety page - safety features and privacy switches.

use dioxus::prelude::*;
use tourails_core::safety::{PrivacySettings, SettingValue};
use tourails_core::seed;
use tourails_ui::{Button, ButtonSize, ButtonVariant, ToggleSwitch};

use crate::components::{Footer, Navbar};

#[component]
pub fn Safety() -> Element {
    let mut settings = use_signal(|| PrivacySettings::new(seed::privacy_settings()));

    let mut toggle = move |id: String| match settings.write().toggle(&id) {
        Ok(on) => tracing::info!(setting = %id, on, "Privacy setting changed"),
        Err(e) => tracing::warn!("{}", e),
    };

    rsx! {
        div { class: "page",
            Navbar {}
            main { class: "safety-page",
                div { class: "container",
                    div { class: "page-heading narrow center fade-up",
                        div { class: "heading-badge", "\u{1F6E1}" }
                        h1 { class: "page-title",
                            "Your "
                            span { class: "text-secondary", "Safety" }
                            " Matters"
                        }
                        p { class: "page-lede muted",
                            "We prioritize your safety with industry-leading security features and privacy controls."
                        }
                    }

                    div { class: "sos-wrap fade-up",
                        button { class: "sos-button",
                            span { class: "sos-icon", "\u{26A0}" }
                            h2 { "Emergency SOS" }
                            p { "Press and hold for 3 seconds to alert emergency contacts" }
                        }
                    }

                    section { class: "safety-section",
                        h2 { class: "section-subtitle", "Safety Features" }
                        div { class: "safety-grid",
                            for feature in seed::safety_features() {
                                div { key: "{feature.title}", class: "safety-card glass-card fade-up",
                                    div { class: "safety-card-icon", "{feature.icon}" }
                                    div { class: "safety-card-body",
                                        div { class: "safety-card-top",
                                            h3 { "{feature.title}" }
                                            span { class: "status-chip", "{feature.status}" }
                                        }
                                        p { class: "muted", "{feature.description}" }
                                    }
                                }
                            }
                        }
                    }

                    section { class: "safety-section",
                        h2 { class: "section-subtitle", "Privacy Settings" }
                        div { class: "privacy-list glass-card",
                            for setting in settings.read().iter() {
                                div { key: "{setting.id}", class: "privacy-row",
                                    div { class: "privacy-row-text",
                                        span { class: "privacy-lock", "\u{1F512}" }
                                        div {
                                            h3 { "{setting.label}" }
                                            p { class: "muted", "{setting.description}" }
                                        }
                                    }
                                    {
                                        let id = setting.id.clone();
                                        match &setting.value {
                                            SettingValue::Switch(on) => rsx! {
                                                ToggleSwitch {
                                                    on: *on,
                                                    label: setting.label.clone(),
                                                    on_toggle: move |_| toggle(id.clone()),
                                                }
                                            },
                                            SettingValue::Choice(choice) => rsx! {
                                                Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, "{choice}" }
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "verify-card glass-card fade-up",
                        div { class: "verify-badge", "\u{2714}" }
                        h3 { "Get Verified" }
                        p { class: "muted", "Verified travelers get a special badge and are more trusted by the community." }
                        Button { variant: ButtonVariant::Gradient, size: ButtonSize::Lg, "Start Verification" }
                    }
                }
            }
            Footer {}
        }
    }
}
