//! Fallback for any path without a screen.

use dioxus::prelude::*;
use tourails_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::components::Navbar;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div { class: "page",
            Navbar {}
            main { class: "not-found",
                p { class: "not-found-code gradient-text", "404" }
                h1 { "This trail goes nowhere" }
                p { class: "muted", "Nothing lives at {path} yet." }
                Link { to: Route::Home {},
                    Button { variant: ButtonVariant::Gradient, "Back to Home" }
                }
            }
        }
    }
}
