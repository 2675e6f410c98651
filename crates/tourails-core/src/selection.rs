//! Like/save toggle sets.
//!
//! A [`ToggleSet`] is a set of ids where toggling an id is a one-element
//! symmetric difference. [`FeedEngagement`] seeds two of them from the
//! posts' own flags so the sets are the only thing the feed reads.

use std::collections::BTreeSet;

use crate::types::Post;

/// Ids currently "on".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet<T: Ord> {
    ids: BTreeSet<T>,
}

impl<T: Ord> Default for ToggleSet<T> {
    fn default() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }
}

impl<T: Ord> ToggleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns true when it is now a member.
    pub fn toggle(&mut self, id: T) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &T) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.ids.iter()
    }
}

impl<T: Ord> FromIterator<T> for ToggleSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Liked and saved state for a feed, seeded from the posts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedEngagement {
    liked: ToggleSet<u32>,
    saved: ToggleSet<u32>,
}

impl FeedEngagement {
    pub fn from_posts(posts: &[Post]) -> Self {
        Self {
            liked: posts.iter().filter(|p| p.is_liked).map(|p| p.id).collect(),
            saved: posts.iter().filter(|p| p.is_saved).map(|p| p.id).collect(),
        }
    }

    pub fn is_liked(&self, post_id: u32) -> bool {
        self.liked.contains(&post_id)
    }

    pub fn is_saved(&self, post_id: u32) -> bool {
        self.saved.contains(&post_id)
    }

    pub fn toggle_like(&mut self, post_id: u32) -> bool {
        let liked = self.liked.toggle(post_id);
        tracing::debug!(post_id, liked, "Toggled like");
        liked
    }

    pub fn toggle_save(&mut self, post_id: u32) -> bool {
        let saved = self.saved.toggle(post_id);
        tracing::debug!(post_id, saved, "Toggled save");
        saved
    }

    /// Like count to display. The seed count already includes our like
    /// when the post was seeded as liked.
    pub fn like_count(&self, post: &Post) -> u32 {
        match (post.is_liked, self.is_liked(post.id)) {
            (false, true) => post.likes.saturating_add(1),
            (true, false) => post.likes.saturating_sub(1),
            _ => post.likes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn toggle_flips_membership() {
        let mut set = ToggleSet::new();
        assert!(set.toggle(7u32));
        assert!(set.contains(&7));
        assert!(!set.toggle(7));
        assert!(set.is_empty());
    }

    #[test]
    fn seeds_from_post_flags() {
        let feed = FeedEngagement::from_posts(seed::posts());
        assert!(feed.is_liked(2));
        assert!(feed.is_saved(2));
        assert!(!feed.is_liked(1));
        assert!(!feed.is_saved(3));
    }

    #[test]
    fn like_count_follows_current_state_for_unliked_seed() {
        let post = &seed::posts()[0];
        let mut feed = FeedEngagement::from_posts(seed::posts());
        assert_eq!(feed.like_count(post), 2341);
        feed.toggle_like(post.id);
        assert_eq!(feed.like_count(post), 2342);
        feed.toggle_like(post.id);
        assert_eq!(feed.like_count(post), 2341);
    }

    #[test]
    fn like_count_drops_when_seeded_like_is_removed() {
        let post = &seed::posts()[1];
        let mut feed = FeedEngagement::from_posts(seed::posts());
        assert_eq!(feed.like_count(post), 4521);
        assert!(!feed.toggle_like(post.id));
        assert_eq!(feed.like_count(post), 4520);
        assert!(feed.toggle_like(post.id));
        assert_eq!(feed.like_count(post), 4521);
    }

    #[test]
    fn save_is_independent_of_like() {
        let mut feed = FeedEngagement::from_posts(seed::posts());
        feed.toggle_save(1);
        assert!(feed.is_saved(1));
        assert!(!feed.is_liked(1));
    }
}
