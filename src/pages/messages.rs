//! Messages page - conversation sidebar and the selected chat.
//!
//! There is no transport: the thread is the seeded history, and a sent
//! draft is only logged.

use dioxus::prelude::*;
use tourails_core::chat::find_conversation;
use tourails_core::seed;

use crate::components::messages::{ConversationList, MessageBubble, MessageInput, TypingIndicator};
use crate::components::Navbar;

#[component]
pub fn Messages() -> Element {
    let conversations = seed::conversations();
    let first = conversations.first().map(|c| c.id).unwrap_or_default();
    let mut selected = use_signal(|| first);

    let on_send = move |text: String| {
        tracing::info!(conversation = selected(), chars = text.chars().count(), "Message sent");
    };

    let active = find_conversation(conversations, selected()).cloned();

    rsx! {
        div { class: "page messages-page",
            Navbar {}
            div { class: "messages-layout",
                ConversationList {
                    conversations: conversations.to_vec(),
                    selected: selected(),
                    on_select: move |id: u32| {
                        tracing::debug!(conversation = id, "Conversation selected");
                        selected.set(id);
                    },
                }

                if let Some(conversation) = active {
                    section { class: "chat-view",
                        header { class: "chat-header",
                            div { class: "avatar-wrap",
                                div { class: "avatar gradient-avatar", "{conversation.avatar}" }
                                if conversation.shows_online_dot() {
                                    span { class: "online-dot" }
                                }
                            }
                            div { class: "chat-contact",
                                h2 { class: "chat-contact-name", "{conversation.user}" }
                                p { class: "chat-presence muted", "{conversation.presence_label()}" }
                            }
                            div { class: "chat-header-actions",
                                button { class: "icon-btn", "aria-label": "Voice call", "\u{1F4DE}" }
                                button { class: "icon-btn", "aria-label": "Video call", "\u{1F3A5}" }
                                button { class: "icon-btn", "aria-label": "More", "\u{22EE}" }
                            }
                        }

                        div { class: "chat-messages",
                            for (index, message) in seed::messages().iter().enumerate() {
                                MessageBubble { key: "{message.id}", message: message.clone(), index }
                            }
                            TypingIndicator {}
                        }

                        MessageInput { on_send }
                    }
                } else {
                    section { class: "chat-view chat-empty",
                        p { class: "empty-icon", "\u{1F4AC}" }
                        p { "Select a conversation to start chatting" }
                    }
                }
            }
        }
    }
}
