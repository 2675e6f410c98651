//! Property-based tests for the filter, toggle sets and wizard bounds
//!
//! Uses proptest to check invariants over arbitrary inputs rather than the
//! handful of seed cases the unit tests cover.

use proptest::prelude::*;
use tourails_core::explore::{CategoryFilter, DestinationFilter, RegionFilter};
use tourails_core::onboarding::{OnboardingState, MAX_BIO_CHARS, MAX_INTERESTS};
use tourails_core::password;
use tourails_core::selection::{FeedEngagement, ToggleSet};
use tourails_core::{seed, Category, Interest, Region};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Queries biased toward substrings that actually occur in the catalog
fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(vec!["bali", "JAPAN", "a", "ia", "Peru", "reef", "zz"])
            .prop_map(String::from),
        prop::string::string_regex("[a-zA-Z ,]{0,6}").expect("valid regex"),
    ]
}

fn region_strategy() -> impl Strategy<Value = RegionFilter> {
    prop::sample::select(RegionFilter::options())
}

fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        prop::sample::select(Category::all().to_vec()).prop_map(CategoryFilter::Only),
    ]
}

fn filter_strategy() -> impl Strategy<Value = DestinationFilter> {
    (query_strategy(), region_strategy(), category_strategy()).prop_map(
        |(query, region, category)| DestinationFilter {
            query,
            region,
            category,
        },
    )
}

fn interest_strategy() -> impl Strategy<Value = Interest> {
    prop::sample::select(Interest::all().to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every hit passes all three predicates, and hits keep catalog order
    #[test]
    fn filter_returns_ordered_subsequence(filter in filter_strategy()) {
        let catalog = seed::destinations();
        let hits = filter.apply(catalog);

        let mut cursor = 0;
        for hit in &hits {
            let needle = filter.query.to_lowercase();
            prop_assert!(
                hit.name.to_lowercase().contains(&needle)
                    || hit.country.to_lowercase().contains(&needle)
            );
            prop_assert!(filter.region.matches(hit.region));
            prop_assert!(filter.category.matches(hit.category));

            let pos = catalog[cursor..]
                .iter()
                .position(|d| d.id == hit.id)
                .map(|p| p + cursor);
            prop_assert!(pos.is_some(), "hit {} out of order", hit.id);
            cursor = pos.unwrap() + 1;
        }
    }

    /// Nothing that passes is left out
    #[test]
    fn filter_is_complete(filter in filter_strategy()) {
        let catalog = seed::destinations();
        let hits = filter.apply(catalog);
        let expected = catalog.iter().filter(|d| filter.matches(d)).count();
        prop_assert_eq!(hits.len(), expected);
    }

    /// Narrowing a facet never grows the result
    #[test]
    fn facets_only_narrow(query in query_strategy(), region in prop::sample::select(Region::all().to_vec())) {
        let catalog = seed::destinations();
        let wide = DestinationFilter { query: query.clone(), ..Default::default() };
        let narrow = DestinationFilter {
            query,
            region: RegionFilter::Only(region),
            category: CategoryFilter::All,
        };
        prop_assert!(narrow.apply(catalog).len() <= wide.apply(catalog).len());
    }

    /// Toggle is an involution: toggle(toggle(x)) == x
    #[test]
    fn toggle_twice_restores_set(
        seed_ids in prop::collection::vec(0u32..20, 0..10),
        id in 0u32..20
    ) {
        let original: ToggleSet<u32> = seed_ids.iter().copied().collect();
        let mut set = original.clone();
        set.toggle(id);
        prop_assert_ne!(&set, &original);
        set.toggle(id);
        prop_assert_eq!(set, original);
    }

    /// Like counts round-trip for any sequence of double toggles
    #[test]
    fn like_count_round_trips(post_index in 0usize..3, times in 1usize..5) {
        let posts = seed::posts();
        let post = &posts[post_index];
        let mut feed = FeedEngagement::from_posts(posts);
        let before = feed.like_count(post);
        for _ in 0..times {
            feed.toggle_like(post.id);
            feed.toggle_like(post.id);
        }
        prop_assert_eq!(feed.like_count(post), before);
    }

    /// Interest selection never exceeds the cap
    #[test]
    fn interests_never_exceed_cap(toggles in prop::collection::vec(interest_strategy(), 0..40)) {
        let mut state = OnboardingState::new();
        for interest in toggles {
            let _ = state.toggle_interest(interest);
            prop_assert!(state.interests().len() <= MAX_INTERESTS);
        }
    }

    /// Bio never exceeds the cap, and short bios are stored verbatim
    #[test]
    fn bio_never_exceeds_cap(bio in ".{0,300}") {
        let mut state = OnboardingState::new();
        state.set_bio(&bio);
        prop_assert!(state.bio_len() <= MAX_BIO_CHARS);
        if bio.chars().count() <= MAX_BIO_CHARS {
            prop_assert_eq!(state.bio(), bio.as_str());
        }
    }

    /// Score stays in 0..=4 for any input
    #[test]
    fn password_score_is_bounded(pw in ".{0,40}") {
        prop_assert!(password::score(&pw) <= 4);
    }
}

#[test]
fn wildcards_and_empty_query_return_catalog() {
    let catalog = seed::destinations();
    let filter = DestinationFilter {
        query: String::new(),
        region: RegionFilter::from_tag("all").unwrap(),
        category: CategoryFilter::from_label("All").unwrap(),
    };
    let ids: Vec<u32> = filter.apply(catalog).iter().map(|d| d.id).collect();
    let all: Vec<u32> = catalog.iter().map(|d| d.id).collect();
    assert_eq!(ids, all);
}
