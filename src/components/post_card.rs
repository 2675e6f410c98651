//! Post Card Component
//!
//! A feed post: author header, photo, like/comment/share/save actions, the
//! like count and the caption. The card is stateless; liked/saved and the
//! displayed count come from the feed's engagement state.

use dioxus::prelude::*;
use tourails_core::{group_thousands, Post};

#[component]
pub fn PostCard(
    post: Post,
    liked: bool,
    saved: bool,
    /// Count to display, already adjusted for the current like state
    like_count: u32,
    on_like: EventHandler<u32>,
    on_save: EventHandler<u32>,
    #[props(default)] index: usize,
) -> Element {
    let id = post.id;
    let likes = group_thousands(u64::from(like_count));
    let delay = format!("animation-delay: {:.1}s", index as f32 * 0.1);

    rsx! {
        article {
            class: "post-card glass-card fade-up",
            style: "{delay}",

            header { class: "post-header",
                div { class: "avatar gradient-avatar", "{post.author.avatar}" }
                div { class: "post-author",
                    div { class: "post-author-name",
                        span { "{post.author.name}" }
                        if post.author.verified {
                            span { class: "verified-badge", title: "Verified traveler", "\u{2713}" }
                        }
                    }
                    span { class: "post-location", "\u{1F4CD} {post.author.location}" }
                }
                button { class: "icon-btn", "aria-label": "More options", "\u{22EF}" }
            }

            img { class: "post-image", src: "{post.image}", alt: "Post by {post.author.name}" }

            div { class: "post-actions",
                div { class: "post-actions-left",
                    button {
                        class: if liked { "icon-btn like-btn liked" } else { "icon-btn like-btn" },
                        "aria-label": if liked { "Unlike" } else { "Like" },
                        "aria-pressed": if liked { "true" } else { "false" },
                        onclick: move |_| on_like.call(id),
                        if liked { "\u{2665}" } else { "\u{2661}" }
                    }
                    button { class: "icon-btn", "aria-label": "Comment", "\u{1F4AC}" }
                    button { class: "icon-btn", "aria-label": "Share", "\u{2197}" }
                }
                button {
                    class: if saved { "icon-btn save-btn saved" } else { "icon-btn save-btn" },
                    "aria-label": if saved { "Unsave" } else { "Save" },
                    "aria-pressed": if saved { "true" } else { "false" },
                    onclick: move |_| on_save.call(id),
                    if saved { "\u{1F516}" } else { "\u{1F3F7}" }
                }
            }

            div { class: "post-body",
                p { class: "post-likes", "{likes} likes" }
                p { class: "post-caption",
                    span { class: "post-caption-author", "{post.author.name} " }
                    "{post.caption}"
                }
                button { class: "post-comments", "View all {post.comments} comments" }
                p { class: "post-time", "{post.time_ago}" }
            }
        }
    }
}
