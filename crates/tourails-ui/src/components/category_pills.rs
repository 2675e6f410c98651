//! Category Pills Component
//!
//! Rounded toggle chips. `CategoryPills` is the single-select radio row on
//! Explore; `CategoryPill` is one chip, reused by the multi-select
//! onboarding interest grid.

use dioxus::prelude::*;

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

fn aria_flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

/// Single-select row; the label equal to `selected` is highlighted.
///
/// ```rust,ignore
/// CategoryPills {
///     categories: CategoryFilter::labels(),
///     selected: filter.read().category.label().to_string(),
///     on_select: move |label: String| { /* parse and store */ },
/// }
/// ```
#[component]
pub fn CategoryPills(
    categories: Vec<String>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "category-pills", role: "radiogroup", "aria-label": "Categories",
            for label in categories {
                button {
                    key: "{label}",
                    class: pill_class(label == selected),
                    role: "radio",
                    "aria-checked": aria_flag(label == selected),
                    onclick: {
                        let label = label.clone();
                        move |_| on_select.call(label.clone())
                    },
                    "{label}"
                }
            }
        }
    }
}

/// One chip with its own click handler.
#[component]
pub fn CategoryPill(
    label: String,
    #[props(default)] selected: bool,
    /// Append a check mark while selected
    #[props(default)]
    show_check: bool,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: pill_class(selected),
            "aria-pressed": aria_flag(selected),
            onclick: move |_| on_click.call(()),
            "{label}"
            if selected && show_check {
                span { class: "pill-check", " \u{2713}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_pill_gets_selected_class() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }

    #[test]
    fn aria_flags_are_string_booleans() {
        assert_eq!(aria_flag(true), "true");
        assert_eq!(aria_flag(false), "false");
    }
}
