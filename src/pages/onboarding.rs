//! Onboarding page - four-step profile wizard.
//!
//! All gating lives in `OnboardingState`; the buttons are disabled from
//! the same predicates, so a rejected transition here only gets logged.

use dioxus::prelude::*;
use tourails_core::{
    AccountType, Advance, Interest, OnboardingState, OnboardingStep, MAX_BIO_CHARS, MAX_INTERESTS,
};
use tourails_ui::{Button, ButtonVariant, CategoryPill, Logo, TextArea};

use crate::app::Route;
use crate::components::images::PhotoUpload;
use crate::components::onboarding::{AccountTypeCard, StepProgress};

#[component]
pub fn Onboarding() -> Element {
    let navigator = use_navigator();
    let mut wizard = use_signal(OnboardingState::new);

    let next = move |_: ()| {
        let result = wizard.write().advance();
        match result {
            Ok(Advance::Step(step)) => tracing::debug!(%step, "Onboarding advanced"),
            Ok(Advance::Complete) => {
                tracing::info!(
                    interests = wizard.read().interests().len(),
                    "Onboarding complete"
                );
                navigator.push(Route::Dashboard {});
            }
            Err(e) => tracing::warn!("{}", e),
        }
    };

    let back = move |_: ()| {
        if let Err(e) = wizard.write().back() {
            tracing::warn!("{}", e);
        }
    };

    let state = wizard.read().clone();
    let step = state.step();

    rsx! {
        div { class: "onboarding-page hero-gradient",
            header { class: "onboarding-header", Logo {} }

            div { class: "container narrow",
                StepProgress { current: step }
            }

            div { class: "container narrow onboarding-body",
                div { key: "{step.number()}", class: "onboarding-step slide-in",
                    {match step {
                        OnboardingStep::AccountType => rsx! {
                            StepHeading { title: "How do you travel?", lede: "This helps us personalize your experience" }
                            div { class: "account-type-grid",
                                for account_type in AccountType::all().iter().copied() {
                                    AccountTypeCard {
                                        key: "{account_type.tag()}",
                                        account_type,
                                        selected: state.account_type() == Some(account_type),
                                        on_select: move |t: AccountType| wizard.write().select_account_type(t),
                                    }
                                }
                            }
                        },
                        OnboardingStep::ProfilePhoto => rsx! {
                            StepHeading {
                                title: "Add a profile photo",
                                lede: "Travelers are more likely to connect with profiles that have photos",
                            }
                            PhotoUpload {
                                image: state.profile_image().map(str::to_string),
                                on_change: move |uri: Option<String>| wizard.write().set_profile_image(uri),
                            }
                        },
                        OnboardingStep::Interests => rsx! {
                            StepHeading {
                                title: "What excites you?",
                                lede: "Select up to {MAX_INTERESTS} interests ({state.interests().len()}/{MAX_INTERESTS})",
                            }
                            div { class: "interest-pills",
                                for interest in Interest::all().iter().copied() {
                                    CategoryPill {
                                        key: "{interest.label()}",
                                        label: interest.label().to_string(),
                                        selected: state.has_interest(interest),
                                        show_check: true,
                                        on_click: move |_| toggle_interest(wizard, interest),
                                    }
                                }
                            }
                        },
                        OnboardingStep::Preferences => rsx! {
                            StepHeading { title: "Almost there!", lede: "Tell other travelers a bit about yourself" }
                            TextArea {
                                id: "onboarding-bio".to_string(),
                                label: "Short Bio".to_string(),
                                value: state.bio().to_string(),
                                oninput: move |bio: String| wizard.write().set_bio(&bio),
                                placeholder: "Share what makes you excited about travel...".to_string(),
                                rows: 5,
                                max_chars: MAX_BIO_CHARS,
                            }
                        },
                    }}
                }
            }

            div { class: "container narrow onboarding-footer",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: if state.can_go_back() { "".to_string() } else { "invisible".to_string() },
                    disabled: !state.can_go_back(),
                    onclick: back,
                    "\u{2190} Back"
                }
                Button {
                    variant: ButtonVariant::Hero,
                    disabled: !state.can_advance(),
                    onclick: next,
                    if step.is_last() { "Complete Setup \u{2192}" } else { "Continue \u{2192}" }
                }
            }
        }
    }
}

fn toggle_interest(mut wizard: Signal<OnboardingState>, interest: Interest) {
    match wizard.write().toggle_interest(interest) {
        Ok(selected) => tracing::debug!(interest = %interest, selected, "Interest toggled"),
        Err(e) => tracing::debug!("{}", e),
    }
}

#[component]
fn StepHeading(title: String, lede: String) -> Element {
    rsx! {
        h2 { class: "step-title", "{title}" }
        p { class: "step-lede muted", "{lede}" }
    }
}
