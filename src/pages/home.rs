//! Home page - marketing entry point.

use dioxus::prelude::*;

use crate::components::{CtaSection, FeaturesSection, Footer, HeroSection, Navbar};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            Navbar {}
            main {
                HeroSection {}
                FeaturesSection {}
                CtaSection {}
            }
            Footer {}
        }
    }
}
