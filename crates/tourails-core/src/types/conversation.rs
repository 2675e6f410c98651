//! Messaging types.

use serde::{Deserialize, Serialize};

/// An entry in the conversation sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u32,
    pub user: String,
    pub avatar: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub online: bool,
    #[serde(default)]
    pub is_group: bool,
}

impl Conversation {
    /// Groups never show a presence dot
    pub fn shows_online_dot(&self) -> bool {
        self.online && !self.is_group
    }

    pub fn presence_label(&self) -> &'static str {
        if self.online {
            "Online"
        } else {
            "Last seen recently"
        }
    }
}

/// Which side of the conversation wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Them,
}

/// Delivery receipt for outgoing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Delivered,
    Read,
}

impl DeliveryStatus {
    /// Single check for delivered, double check for read
    pub fn glyph(&self) -> &'static str {
        match self {
            DeliveryStatus::Delivered => "\u{2713}",
            DeliveryStatus::Read => "\u{2713}\u{2713}",
        }
    }
}

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    pub time: String,
    pub status: DeliveryStatus,
}

impl Message {
    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}
