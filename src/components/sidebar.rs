//! Dashboard Sidebar Component
//!
//! Fixed left rail, 280px open and 80px collapsed. Collapsed shows icons
//! and the compass mark only. The entry for the current route is
//! highlighted.

use dioxus::prelude::*;
use tourails_ui::{Button, ButtonSize, ButtonVariant, Logo, LogoSize};

use crate::app::Route;

pub const SIDEBAR_OPEN_WIDTH: u32 = 280;
pub const SIDEBAR_COLLAPSED_WIDTH: u32 = 80;

pub fn sidebar_width(open: bool) -> u32 {
    if open {
        SIDEBAR_OPEN_WIDTH
    } else {
        SIDEBAR_COLLAPSED_WIDTH
    }
}

/// Entries in the sidebar
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SidebarItem {
    Dashboard,
    Explore,
    Community,
    Messages,
    Safety,
}

impl SidebarItem {
    pub fn all() -> [SidebarItem; 5] {
        [
            SidebarItem::Dashboard,
            SidebarItem::Explore,
            SidebarItem::Community,
            SidebarItem::Messages,
            SidebarItem::Safety,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SidebarItem::Dashboard => "Dashboard",
            SidebarItem::Explore => "Explore",
            SidebarItem::Community => "Community",
            SidebarItem::Messages => "Messages",
            SidebarItem::Safety => "Safety",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SidebarItem::Dashboard => "\u{1F3E0}",
            SidebarItem::Explore => "\u{1F9ED}",
            SidebarItem::Community => "\u{1F465}",
            SidebarItem::Messages => "\u{1F4AC}",
            SidebarItem::Safety => "\u{1F6E1}",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            SidebarItem::Dashboard => Route::Dashboard {},
            SidebarItem::Explore => Route::Explore {},
            SidebarItem::Community => Route::Community {},
            SidebarItem::Messages => Route::Messages {},
            SidebarItem::Safety => Route::Safety {},
        }
    }
}

#[component]
pub fn Sidebar(open: bool, on_toggle: EventHandler<()>) -> Element {
    let current: Route = use_route();

    rsx! {
        aside {
            class: if open { "sidebar" } else { "sidebar collapsed" },
            style: "width: {sidebar_width(open)}px",

            div { class: "sidebar-header",
                if open {
                    Logo { size: LogoSize::Md }
                } else {
                    Logo { size: LogoSize::Sm, show_text: false }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: "Toggle sidebar".to_string(),
                    onclick: move |_| on_toggle.call(()),
                    if open { "\u{2715}" } else { "\u{2630}" }
                }
            }

            nav { class: "sidebar-nav",
                for item in SidebarItem::all() {
                    Link {
                        key: "{item.label()}",
                        to: item.route(),
                        class: if current == item.route() { "sidebar-item active" } else { "sidebar-item" },
                        span { class: "sidebar-icon", "{item.icon()}" }
                        if open {
                            span { class: "sidebar-label", "{item.label()}" }
                        }
                    }
                }
            }

            div { class: "sidebar-footer",
                Link { to: Route::Home {}, class: "sidebar-item",
                    span { class: "sidebar-icon", "\u{21AA}" }
                    if open {
                        span { class: "sidebar-label", "Log out" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_open_flag() {
        assert_eq!(sidebar_width(true), 280);
        assert_eq!(sidebar_width(false), 80);
    }

    #[test]
    fn dashboard_entry_points_home_of_the_signed_in_area() {
        assert_eq!(SidebarItem::Dashboard.route(), Route::Dashboard {});
        assert_eq!(SidebarItem::all().len(), 5);
    }
}
