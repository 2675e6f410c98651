//! Message Bubble Component
//!
//! Chat-style bubbles: ours on the right in the brand gradient with a
//! delivery tick, theirs on the left on a muted surface.

use dioxus::prelude::*;
use tourails_core::Message;

fn row_class(is_mine: bool) -> &'static str {
    if is_mine {
        "message-row message-row-sent"
    } else {
        "message-row message-row-received"
    }
}

fn bubble_class(is_mine: bool) -> &'static str {
    if is_mine {
        "message-bubble message-bubble-sent"
    } else {
        "message-bubble message-bubble-received"
    }
}

/// Individual message bubble component
#[component]
pub fn MessageBubble(message: Message, #[props(default)] index: usize) -> Element {
    let is_mine = message.is_mine();
    let delay = format!("animation-delay: {:.2}s", index as f32 * 0.05);

    rsx! {
        div { class: row_class(is_mine),
            div { class: "{bubble_class(is_mine)} fade-up", style: "{delay}",
                p { class: "message-bubble-content", "{message.text}" }
                div { class: "message-bubble-meta",
                    span { class: "message-bubble-time", "{message.time}" }
                    if is_mine {
                        span { class: "message-status", "{message.status.glyph()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_are_distinct() {
        assert_ne!(row_class(true), row_class(false));
        assert!(bubble_class(true).ends_with("sent"));
        assert!(bubble_class(false).ends_with("received"));
    }
}
