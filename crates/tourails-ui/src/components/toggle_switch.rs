//! Toggle Switch Component
//!
//! Pill-shaped on/off switch with a sliding knob.

use dioxus::prelude::*;

#[component]
pub fn ToggleSwitch(
    /// Current state
    on: bool,
    /// Called on click; the caller flips the state
    on_toggle: EventHandler<()>,
    /// Accessible label
    label: String,
) -> Element {
    rsx! {
        button {
            class: if on { "toggle-switch on" } else { "toggle-switch" },
            role: "switch",
            "aria-checked": if on { "true" } else { "false" },
            "aria-label": "{label}",
            onclick: move |_| on_toggle.call(()),
            span { class: "toggle-knob" }
        }
    }
}
