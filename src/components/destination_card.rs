//! Destination Card Component
//!
//! Photo card on the Explore grid with a price badge, a save heart and the
//! rating / traveler counts underneath.

use dioxus::prelude::*;
use tourails_core::Destination;
use tourails_ui::{Button, ButtonSize, ButtonVariant};

/// Stagger between consecutive cards, in seconds
const STAGGER_SECS: f32 = 0.05;

fn heart_class(saved: bool) -> &'static str {
    if saved {
        "save-heart saved"
    } else {
        "save-heart"
    }
}

#[component]
pub fn DestinationCard(
    destination: Destination,
    /// Position in the filtered grid, drives the entrance delay
    index: usize,
    saved: bool,
    on_toggle_save: EventHandler<u32>,
) -> Element {
    let id = destination.id;
    let delay = format!("animation-delay: {:.2}s", index as f32 * STAGGER_SECS);

    rsx! {
        div { class: "destination-card glass-card fade-up", style: "{delay}",
            div { class: "destination-media",
                img {
                    class: "destination-image",
                    src: "{destination.image}",
                    alt: "{destination.name}",
                }
                div { class: "destination-shade" }
                button {
                    class: "destination-save",
                    "aria-label": if saved { "Remove from saved" } else { "Save destination" },
                    "aria-pressed": if saved { "true" } else { "false" },
                    onclick: move |_| on_toggle_save.call(id),
                    span { class: heart_class(saved), if saved { "\u{2665}" } else { "\u{2661}" } }
                }
                div { class: "destination-price", "{destination.price}" }
                div { class: "destination-location",
                    span { class: "pin", "\u{1F4CD}" }
                    span { class: "destination-name", "{destination.name}" }
                }
            }
            div { class: "destination-body",
                div { class: "destination-row",
                    span { class: "muted", "{destination.country}" }
                    span { class: "destination-rating",
                        span { class: "star", "\u{2605}" }
                        "{destination.rating}"
                    }
                }
                div { class: "destination-row",
                    span { class: "muted", "{destination.travelers_display()} travelers" }
                    Button { variant: ButtonVariant::Secondary, size: ButtonSize::Sm, "Explore" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_heart_is_filled() {
        assert_eq!(heart_class(true), "save-heart saved");
        assert_eq!(heart_class(false), "save-heart");
    }
}
