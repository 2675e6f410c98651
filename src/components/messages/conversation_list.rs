//! Conversation Sidebar Components
//!
//! Searchable list of conversations. The selected row is highlighted;
//! unread counts show as a coral badge and online contacts get a dot on
//! their avatar (never for groups).

use dioxus::prelude::*;
use tourails_core::chat::filter_conversations;
use tourails_core::Conversation;
use tourails_ui::SearchInput;

#[component]
pub fn ConversationList(
    conversations: Vec<Conversation>,
    selected: u32,
    on_select: EventHandler<u32>,
) -> Element {
    let mut query = use_signal(String::new);
    let shown: Vec<Conversation> = filter_conversations(&conversations, &query.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        aside { class: "conversation-sidebar",
            div { class: "conversation-sidebar-header",
                h2 { class: "conversation-sidebar-title", "Messages" }
                SearchInput {
                    value: query(),
                    oninput: move |q: String| query.set(q),
                    placeholder: "Search conversations...",
                }
            }
            div { class: "conversation-items",
                if shown.is_empty() {
                    p { class: "conversation-empty", "No conversations match \"{query}\"" }
                }
                for conversation in shown {
                    ConversationItem {
                        key: "{conversation.id}",
                        selected: conversation.id == selected,
                        conversation: conversation.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
pub fn ConversationItem(
    conversation: Conversation,
    selected: bool,
    on_select: EventHandler<u32>,
) -> Element {
    let id = conversation.id;

    rsx! {
        button {
            class: if selected { "conversation-item selected" } else { "conversation-item" },
            onclick: move |_| on_select.call(id),
            div { class: "avatar-wrap",
                div { class: "avatar gradient-avatar", "{conversation.avatar}" }
                if conversation.shows_online_dot() {
                    span { class: "online-dot" }
                }
            }
            div { class: "conversation-summary",
                div { class: "conversation-summary-top",
                    span { class: "conversation-user", "{conversation.user}" }
                    span { class: "conversation-time", "{conversation.time}" }
                }
                div { class: "conversation-summary-bottom",
                    span { class: "conversation-preview", "{conversation.last_message}" }
                    if conversation.unread > 0 {
                        span { class: "unread-badge", "{conversation.unread}" }
                    }
                }
            }
        }
    }
}
