//! Site footer for the marketing screens.

use dioxus::prelude::*;
use tourails_ui::{Logo, LogoSize};

use crate::app::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                div { class: "footer-brand",
                    Logo { size: LogoSize::Sm }
                    p { class: "footer-tagline", "Travel. Connect. Share." }
                }
                nav { class: "footer-links",
                    Link { to: Route::Explore {}, "Explore" }
                    Link { to: Route::Community {}, "Community" }
                    Link { to: Route::Safety {}, "Safety" }
                    Link { to: Route::Signup {}, "Join" }
                }
                p { class: "footer-copy", "\u{00A9} 2025 Tourails. All rights reserved." }
            }
        }
    }
}
