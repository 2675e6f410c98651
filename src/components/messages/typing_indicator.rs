//! Three bouncing dots under the last message.

use dioxus::prelude::*;

#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row message-row-received",
            div { class: "message-bubble message-bubble-received typing-indicator",
                "aria-label": "Typing",
                for i in 0..3u8 {
                    span { key: "{i}", class: "typing-dot", style: "animation-delay: {i}00ms" }
                }
            }
        }
    }
}
