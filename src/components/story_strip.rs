//! Story Strip Component
//!
//! Horizontally scrolling row of story bubbles above the feed, led by an
//! "Add story" bubble. Unseen stories get the gradient ring.

use dioxus::prelude::*;
use tourails_core::Story;

#[component]
pub fn StoryStrip(stories: Vec<Story>) -> Element {
    rsx! {
        div { class: "story-strip glass-card",
            div { class: "story-bubble",
                div { class: "story-ring add", span { class: "story-add", "+" } }
                span { class: "story-name", "Your story" }
            }
            for story in stories.iter() {
                div { key: "{story.id}", class: "story-bubble",
                    div { class: if story.has_new { "story-ring new" } else { "story-ring seen" },
                        span { class: "story-avatar", "{story.avatar}" }
                    }
                    span { class: "story-name", "{story.user}" }
                }
            }
        }
    }
}
