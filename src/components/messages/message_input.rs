//! Message Input Component
//!
//! Composer bar at the bottom of the chat view. Enter sends, Shift+Enter
//! inserts a newline. Blank drafts never reach `on_send`.

use dioxus::prelude::*;
use tourails_core::chat::MessageDraft;

#[component]
pub fn MessageInput(
    /// Called with the trimmed text of a sent draft
    on_send: EventHandler<String>,
    #[props(default = "Type a message...".to_string())]
    placeholder: String,
) -> Element {
    let mut draft = use_signal(MessageDraft::default);

    let mut send = move || {
        if let Some(text) = draft.write().take() {
            on_send.call(text);
        }
    };

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send();
        }
    };

    let can_send = draft.read().can_send();

    rsx! {
        div { class: "message-input-bar",
            button { class: "icon-btn", "aria-label": "Attach file", "\u{1F4CE}" }
            div { class: "message-input-field",
                textarea {
                    class: "message-input-textarea",
                    placeholder: "{placeholder}",
                    value: "{draft.read().text()}",
                    oninput: move |e| draft.write().set(e.value()),
                    onkeydown: handle_keydown,
                    rows: 1,
                }
                button { class: "icon-btn emoji-btn", "aria-label": "Emoji", "\u{1F642}" }
            }
            button {
                class: if can_send { "message-send-btn active" } else { "message-send-btn" },
                onclick: move |_| send(),
                disabled: !can_send,
                title: "Send message (Enter)",
                "\u{27A4}"
            }
        }
    }
}
