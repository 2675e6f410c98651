//! Messages screen state: conversation lookup and search, and the composer.
//!
//! There is no transport. Sending only validates and clears the draft.

use crate::types::Conversation;

/// Find a conversation by id.
pub fn find_conversation(conversations: &[Conversation], id: u32) -> Option<&Conversation> {
    conversations.iter().find(|c| c.id == id)
}

/// Conversations whose participant or last message contains `query`,
/// ignoring case. An empty query keeps everything.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    query: &str,
) -> Vec<&'a Conversation> {
    let needle = query.trim().to_lowercase();
    conversations
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.user.to_lowercase().contains(&needle)
                || c.last_message.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Total unread across conversations, for badges.
pub fn total_unread(conversations: &[Conversation]) -> u32 {
    conversations.iter().map(|c| c.unread).sum()
}

/// Text in the message input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageDraft {
    text: String,
}

impl MessageDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whitespace-only drafts cannot be sent
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Take the trimmed text and clear the input. `None` if blank, in which
    /// case the draft is left untouched.
    pub fn take(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let sent = self.text.trim().to_string();
        self.text.clear();
        Some(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn finds_by_id() {
        let convs = seed::conversations();
        assert_eq!(find_conversation(convs, 2).map(|c| c.user.as_str()), Some("Mike Johnson"));
        assert!(find_conversation(convs, 99).is_none());
    }

    #[test]
    fn search_covers_name_and_last_message() {
        let convs = seed::conversations();
        assert_eq!(filter_conversations(convs, "").len(), 4);

        let hits = filter_conversations(convs, "TOKYO");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_group);

        let hits = filter_conversations(convs, "sunset");
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn unread_total() {
        assert_eq!(total_unread(seed::conversations()), 15);
    }

    #[test]
    fn draft_sends_trimmed_and_clears() {
        let mut draft = MessageDraft::default();
        draft.set("   ");
        assert!(!draft.can_send());
        assert_eq!(draft.take(), None);
        assert_eq!(draft.text(), "   ");

        draft.set("  see you in Ubud ");
        assert_eq!(draft.take().as_deref(), Some("see you in Ubud"));
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn group_hides_online_dot() {
        let convs = seed::conversations();
        assert!(convs[0].shows_online_dot());
        assert!(!convs[3].shows_online_dot());
        assert_eq!(convs[2].presence_label(), "Last seen recently");
    }
}
