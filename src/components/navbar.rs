//! Navigation Bar Component
//!
//! Fixed top bar shared by the marketing screens. Transparent at the top
//! of the page, solid with a blur once the window scrolls past the
//! threshold. Carries the theme toggle, "Log in" and "Join Now".
//! Below 768px the links collapse into a dropdown behind the menu button.

use dioxus::prelude::*;
use tourails_core::shell::is_scrolled;
use tourails_ui::{Button, ButtonSize, ButtonVariant, Logo};

use crate::app::Route;
use crate::context::use_theme;

/// Streams `window.scrollY` back to Rust, once up front and then on every
/// scroll event. The trailing await keeps the channel open.
const SCROLL_LISTENER: &str = r#"
    dioxus.send(window.scrollY);
    window.addEventListener("scroll", () => dioxus.send(window.scrollY), { passive: true });
    await new Promise(() => {});
"#;

/// Top-level sections reachable from the bar
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLink {
    Explore,
    Community,
    Safety,
}

impl NavLink {
    pub fn all() -> [NavLink; 3] {
        [NavLink::Explore, NavLink::Community, NavLink::Safety]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Explore => "Explore",
            NavLink::Community => "Community",
            NavLink::Safety => "Safety",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavLink::Explore => Route::Explore {},
            NavLink::Community => Route::Community {},
            NavLink::Safety => Route::Safety {},
        }
    }
}

fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "navbar navbar-scrolled slide-down"
    } else {
        "navbar slide-down"
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut theme = use_theme();
    let mut scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);
    let current: Route = use_route();

    use_future(move || async move {
        let mut eval = document::eval(SCROLL_LISTENER);
        while let Ok(y) = eval.recv::<f64>().await {
            let now = is_scrolled(y);
            if *scrolled.peek() != now {
                tracing::trace!(scroll_y = y, scrolled = now, "Navbar background changed");
                scrolled.set(now);
            }
        }
    });

    let toggle_theme = move |_: ()| {
        let next = theme().toggled();
        tracing::debug!(theme = %next, "Theme toggled");
        theme.set(next);
    };

    rsx! {
        nav { class: navbar_class(scrolled()),
            div { class: "container navbar-inner",
                Link { to: Route::Home {}, Logo {} }

                div { class: "navbar-links",
                    for link in NavLink::all() {
                        Link {
                            key: "{link.label()}",
                            to: link.route(),
                            class: if current == link.route() { "navbar-link active" } else { "navbar-link" },
                            "{link.label()}"
                        }
                    }
                }

                div { class: "navbar-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        class: "rounded-full".to_string(),
                        aria_label: "Toggle theme".to_string(),
                        onclick: toggle_theme,
                        "{theme().toggle_icon()}"
                    }
                    Link { to: Route::login(),
                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Sm, "Log in" }
                    }
                    Link { to: Route::Signup {},
                        Button { variant: ButtonVariant::Gradient, size: ButtonSize::Sm, "Join Now" }
                    }
                }

                button {
                    class: "navbar-menu-btn",
                    "aria-label": "Toggle menu",
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "\u{2715}" } else { "\u{2630}" }
                }
            }

            if menu_open() {
                div { class: "navbar-mobile expand-in",
                    for link in NavLink::all() {
                        Link {
                            key: "{link.label()}",
                            to: link.route(),
                            class: "navbar-mobile-link",
                            onclick: move |_| menu_open.set(false),
                            "{link.label()}"
                        }
                    }
                    div { class: "navbar-mobile-actions",
                        Link { to: Route::login(), class: "flex-1",
                            Button { variant: ButtonVariant::Outline, class: "w-full".to_string(), "Log in" }
                        }
                        Link { to: Route::Signup {}, class: "flex-1",
                            Button { variant: ButtonVariant::Gradient, class: "w-full".to_string(), "Join Now" }
                        }
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
    fn links_point_at_their_routes() {
        assert_eq!(NavLink::Explore.route(), Route::Explore {});
        assert_eq!(NavLink::Community.route().to_string(), "/community");
        assert_eq!(NavLink::Safety.label(), "Safety");
    }

    #[test]
    fn scrolled_bar_gets_solid_class() {
        assert!(navbar_class(true).contains("navbar-scrolled"));
        assert!(!navbar_class(false).contains("navbar-scrolled"));
    }
}
