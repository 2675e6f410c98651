//! Dashboard page - signed-in overview.

use dioxus::prelude::*;
use tourails_core::seed;
use tourails_ui::{Button, ButtonSize, ButtonVariant, SearchInput};

use crate::app::Route;
use crate::components::{sidebar_width, Sidebar};

#[component]
pub fn Dashboard() -> Element {
    let mut sidebar_open = use_signal(|| true);
    let mut search = use_signal(String::new);

    let toggle_sidebar = move |_: ()| {
        let open = !sidebar_open();
        tracing::debug!(open, "Sidebar toggled");
        sidebar_open.set(open);
    };

    rsx! {
        div { class: "dashboard-page",
            Sidebar { open: sidebar_open(), on_toggle: toggle_sidebar }

            main {
                class: "dashboard-main",
                style: "margin-left: {sidebar_width(sidebar_open())}px",

                header { class: "dashboard-topbar",
                    div { class: "dashboard-topbar-left",
                        SearchInput {
                            value: search(),
                            oninput: move |q: String| search.set(q),
                            placeholder: "Search destinations, travelers...",
                            class: "glass".to_string(),
                        }
                    }
                    div { class: "dashboard-topbar-right",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: "has-dot".to_string(),
                            aria_label: "Notifications".to_string(),
                            "\u{1F514}"
                        }
                        div { class: "avatar gradient-avatar", "JD" }
                    }
                }

                div { class: "dashboard-content",
                    div { class: "fade-up",
                        h1 { class: "dashboard-welcome",
                            "Welcome back, "
                            span { class: "text-secondary", "John" }
                            " \u{1F44B}"
                        }
                        p { class: "muted", "Here's what's happening with your travel adventures" }
                    }

                    div { class: "stats-grid",
                        for (index, stat) in seed::dashboard_stats().iter().enumerate() {
                            div {
                                key: "{stat.label}",
                                class: "stat-card glass-card fade-up",
                                style: "animation-delay: {index}00ms",
                                div { class: "stat-card-top",
                                    div { class: "stat-icon", "{stat.icon}" }
                                    span { class: "stat-change", "{stat.change}" }
                                }
                                div { class: "stat-value", "{stat.value}" }
                                div { class: "stat-label muted", "{stat.label}" }
                            }
                        }
                    }

                    div { class: "dashboard-columns",
                        section { class: "trips-card glass-card fade-up",
                            div { class: "card-heading",
                                h2 { "Upcoming Trips" }
                                Link { to: Route::Explore {}, class: "link", "View all" }
                            }
                            div { class: "trip-list",
                                for trip in seed::upcoming_trips() {
                                    div { key: "{trip.destination}", class: "trip-row",
                                        div { class: "trip-emoji", "{trip.emoji}" }
                                        div { class: "trip-info",
                                            h3 { "{trip.destination}" }
                                            p { class: "muted", "{trip.dates}" }
                                        }
                                        span { class: "trip-chevron", "\u{203A}" }
                                    }
                                }
                            }
                            Link { to: Route::Explore {},
                                Button { variant: ButtonVariant::Gradient, class: "w-full".to_string(), "\u{1F9ED} Plan New Trip" }
                            }
                        }

                        section { class: "activity-card glass-card fade-up",
                            h2 { "Recent Activity" }
                            div { class: "activity-list",
                                for activity in seed::recent_activity() {
                                    div { key: "{activity.user}{activity.time}", class: "activity-row",
                                        div { class: "avatar gradient-avatar sm", "{activity.initial()}" }
                                        div { class: "activity-text",
                                            p {
                                                span { class: "activity-user", "{activity.user} " }
                                                span { class: "muted", "{activity.action}" }
                                            }
                                            p { class: "activity-time muted", "{activity.time}" }
                                        }
                                    }
                                }
                            }
                            Button { variant: ButtonVariant::Ghost, class: "w-full text-secondary".to_string(), "View All Activity" }
                        }
                    }
                }
            }
        }
    }
}
