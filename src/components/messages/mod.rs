//! Messaging components: conversation sidebar, chat bubbles, composer.

mod conversation_list;
mod message_bubble;
mod message_input;
mod typing_indicator;

pub use conversation_list::{ConversationItem, ConversationList};
pub use message_bubble::MessageBubble;
pub use message_input::MessageInput;
pub use typing_indicator::TypingIndicator;
