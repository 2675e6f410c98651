//! Explore page - destination search.
//!
//! The search box, region select and category pills feed one
//! `DestinationFilter`; the grid is a memo over it so every keystroke
//! re-derives the visible cards from the full catalog.

use dioxus::prelude::*;
use tourails_core::explore::{CategoryFilter, DestinationFilter, RegionFilter};
use tourails_core::{seed, Destination, ToggleSet};
use tourails_ui::{Button, ButtonSize, ButtonVariant, CategoryPills, SearchInput};

use crate::components::{DestinationCard, Footer, Navbar};

#[component]
pub fn Explore() -> Element {
    let mut filter = use_signal(DestinationFilter::default);
    let mut show_filters = use_signal(|| false);
    let mut saved: Signal<ToggleSet<u32>> = use_signal(ToggleSet::new);

    let visible = use_memo(move || {
        filter
            .read()
            .apply(seed::destinations())
            .into_iter()
            .cloned()
            .collect::<Vec<Destination>>()
    });

    let on_region = move |e: FormEvent| match RegionFilter::from_tag(&e.value()) {
        Ok(region) => filter.write().region = region,
        Err(err) => tracing::warn!("Ignoring region selection: {}", err),
    };

    let on_category = move |label: String| match CategoryFilter::from_label(&label) {
        Ok(category) => filter.write().category = category,
        Err(err) => tracing::warn!("Ignoring category selection: {}", err),
    };

    let toggle_save = move |id: u32| {
        let now_saved = saved.write().toggle(id);
        tracing::debug!(destination = id, saved = now_saved, "Toggled saved destination");
    };

    let current = filter.read().clone();
    let count = visible.read().len();

    rsx! {
        div { class: "page",
            Navbar {}

            section { class: "page-hero hero-gradient",
                div { class: "container narrow center fade-up",
                    h1 { class: "page-title",
                        "Explore the "
                        span { class: "text-secondary", "World" }
                    }
                    p { class: "page-lede", "Discover breathtaking destinations curated by travelers like you" }
                    SearchInput {
                        value: current.query.clone(),
                        oninput: move |q: String| filter.write().query = q,
                        placeholder: "Search destinations, countries...",
                        class: "search-lg glass".to_string(),
                        trailing: rsx! {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Icon,
                                aria_label: "Toggle filters".to_string(),
                                onclick: move |_| show_filters.set(!show_filters()),
                                "\u{2699}"
                            }
                        },
                    }
                }
            }

            if show_filters() {
                section { class: "filter-panel expand-in",
                    div { class: "container filter-row",
                        label { class: "region-select",
                            span { class: "region-select-icon", "\u{1F310}" }
                            select {
                                value: current.region.tag(),
                                onchange: on_region,
                                for option in RegionFilter::options() {
                                    option {
                                        key: "{option.tag()}",
                                        value: option.tag(),
                                        selected: option == current.region,
                                        "{option.label()}"
                                    }
                                }
                            }
                        }
                        CategoryPills {
                            categories: CategoryFilter::labels(),
                            selected: current.category.label().to_string(),
                            on_select: on_category,
                        }
                        if current.is_narrowed() {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Sm,
                                class: "muted".to_string(),
                                onclick: move |_| filter.write().clear_facets(),
                                "\u{2715} Clear filters"
                            }
                        }
                    }
                }
            }

            section { class: "destinations-section",
                div { class: "container",
                    p { class: "result-count muted",
                        "Showing "
                        span { class: "result-count-value", "{count}" }
                        " destinations"
                    }
                    if count == 0 {
                        div { class: "empty-state",
                            p { class: "empty-icon", "\u{1F5FA}" }
                            p { "No destinations match your search." }
                        }
                    }
                    div { class: "destinations-grid",
                        for (index, destination) in visible.read().iter().enumerate() {
                            DestinationCard {
                                key: "{destination.id}",
                                saved: saved.read().contains(&destination.id),
                                destination: destination.clone(),
                                index,
                                on_toggle_save: toggle_save,
                            }
                        }
                    }
                    div { class: "load-more",
                        Button { variant: ButtonVariant::Gradient, size: ButtonSize::Lg,
                            "Load More Destinations \u{2304}"
                        }
                    }
                }
            }

            section { class: "map-section",
                div { class: "container",
                    div { class: "map-placeholder glass-card",
                        span { class: "map-icon", "\u{1F5FA}" }
                        h3 { "Interactive map coming soon" }
                        p { class: "muted", "See every destination and fellow traveler on one map." }
                    }
                }
            }

            Footer {}
        }
    }
}
