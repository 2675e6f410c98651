//! Signup page - "Create account".
//!
//! Validation runs on submit. A valid form shows the spinner for the
//! configured delay and then always continues to onboarding.

use dioxus::prelude::*;
use tourails_core::seed;
use tourails_core::signup::SignupForm;
use tourails_ui::{Button, ButtonSize, ButtonVariant, Input, Logo, LogoSize, PasswordMeter};

use crate::app::Route;
use crate::context::get_config;

#[component]
pub fn Signup() -> Element {
    let navigator = use_navigator();
    let mut form = use_signal(SignupForm::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if loading() {
            return;
        }
        if let Err(err) = form.read().validate() {
            tracing::debug!("Signup rejected: {}", err);
            error.set(Some(err.to_string()));
            return;
        }

        error.set(None);
        loading.set(true);
        let delay = get_config().signup_delay;
        tracing::info!(email = %form.read().email.trim(), "Creating account");

        spawn(async move {
            tokio::time::sleep(delay).await;
            loading.set(false);
            navigator.push(Route::Onboarding {});
        });
    };

    let current = form.read().clone();
    let strength = current.strength();

    rsx! {
        div { class: "signup-page hero-gradient",
            aside { class: "signup-aside",
                div { class: "signup-aside-shade" }
                ul { class: "signup-highlights",
                    for (index, highlight) in seed::signup_highlights().iter().enumerate() {
                        li {
                            key: "{highlight.text}",
                            class: "signup-highlight fade-in-left",
                            style: "animation-delay: {index}00ms",
                            span { class: "signup-highlight-icon", "{highlight.icon}" }
                            span { "{highlight.text}" }
                        }
                    }
                }
            }

            div { class: "signup-main",
                div { class: "signup-card fade-up",
                    Link { to: Route::Home {}, class: "signup-logo", Logo { size: LogoSize::Lg } }
                    h1 { class: "signup-title", "Create account" }
                    p { class: "muted", "Start your travel journey with Tourails" }

                    form { class: "signup-form", novalidate: true, onsubmit: submit,
                        Input {
                            id: "signup-name".to_string(),
                            label: "Full Name".to_string(),
                            icon: "\u{1F464}".to_string(),
                            placeholder: "Enter your name".to_string(),
                            value: current.name.clone(),
                            oninput: move |v: String| form.write().name = v,
                            required: true,
                        }
                        Input {
                            id: "signup-email".to_string(),
                            label: "Email".to_string(),
                            icon: "\u{2709}".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "Enter your email".to_string(),
                            value: current.email.clone(),
                            oninput: move |v: String| form.write().email = v,
                            required: true,
                        }
                        Input {
                            id: "signup-password".to_string(),
                            label: "Password".to_string(),
                            icon: "\u{1F512}".to_string(),
                            input_type: current.password_input_type().to_string(),
                            placeholder: "Create a password".to_string(),
                            value: current.password.clone(),
                            oninput: move |v: String| form.write().password = v,
                            required: true,
                            trailing: rsx! {
                                button {
                                    r#type: "button",
                                    class: "icon-btn",
                                    "aria-label": if current.show_password { "Hide password" } else { "Show password" },
                                    onclick: move |_| {
                                        let mut f = form.write();
                                        f.show_password = !f.show_password;
                                    },
                                    if current.show_password { "\u{1F648}" } else { "\u{1F441}" }
                                }
                            },
                        }
                        if current.shows_meter() {
                            PasswordMeter { strength }
                        }

                        label { class: "terms-row",
                            input {
                                r#type: "checkbox",
                                id: "terms",
                                checked: current.accepted_terms,
                                onchange: move |e: FormEvent| form.write().accepted_terms = e.checked(),
                            }
                            span { class: "muted",
                                "I agree to the "
                                span { class: "link", "Terms of Service" }
                                " and "
                                span { class: "link", "Privacy Policy" }
                            }
                        }

                        if let Some(message) = error() {
                            p { class: "form-error", role: "alert", "{message}" }
                        }

                        Button {
                            variant: ButtonVariant::Hero,
                            size: ButtonSize::Lg,
                            button_type: "submit".to_string(),
                            class: "w-full".to_string(),
                            disabled: loading(),
                            if loading() {
                                span { class: "spinner", "aria-label": "Creating account" }
                            } else {
                                "Create Account \u{2192}"
                            }
                        }
                    }

                    p { class: "signup-signin",
                        span { class: "muted", "Already have an account? " }
                        Link { to: Route::login(), class: "link", "Sign in" }
                    }
                }
            }
        }
    }
}
