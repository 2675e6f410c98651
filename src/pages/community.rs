//! Community page - stories and the post feed.
//!
//! Likes and saves live in one `FeedEngagement` seeded from the posts, and
//! both the heart state and the displayed count are read from it.

use dioxus::prelude::*;
use tourails_core::{seed, FeedEngagement};

use crate::components::{Footer, Navbar, PostCard, StoryStrip};

#[component]
pub fn Community() -> Element {
    let mut engagement = use_signal(|| FeedEngagement::from_posts(seed::posts()));

    let on_like = move |id: u32| {
        let liked = engagement.write().toggle_like(id);
        tracing::debug!(post = id, liked, "Toggled like");
    };

    let on_save = move |id: u32| {
        let saved = engagement.write().toggle_save(id);
        tracing::debug!(post = id, saved, "Toggled save");
    };

    rsx! {
        div { class: "page",
            Navbar {}
            main { class: "feed-page",
                div { class: "container feed-column",
                    StoryStrip { stories: seed::stories().to_vec() }

                    section { class: "feed",
                        for (index, post) in seed::posts().iter().enumerate() {
                            {
                                let state = engagement.read();
                                rsx! {
                                    PostCard {
                                        key: "{post.id}",
                                        liked: state.is_liked(post.id),
                                        saved: state.is_saved(post.id),
                                        like_count: state.like_count(post),
                                        post: post.clone(),
                                        on_like,
                                        on_save,
                                        index,
                                    }
                                }
                            }
                        }
                    }

                    div { class: "feed-loading muted",
                        span { class: "spinner" }
                        "Loading more posts..."
                    }
                }
            }
            Footer {}
        }
    }
}
