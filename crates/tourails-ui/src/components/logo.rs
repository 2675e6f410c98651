//! Logo Component
//!
//! The two-tone "TOURAILS" wordmark.

use dioxus::prelude::*;

/// Logo sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl LogoSize {
    /// Class for the wordmark text size
    pub fn text_class(&self) -> &'static str {
        match self {
            LogoSize::Sm => "logo-text-sm",
            LogoSize::Md => "logo-text-md",
            LogoSize::Lg => "logo-text-lg",
            LogoSize::Xl => "logo-text-xl",
        }
    }

    /// Class for the badge used when the text is hidden
    pub fn mark_class(&self) -> &'static str {
        match self {
            LogoSize::Sm => "logo-mark-sm",
            LogoSize::Md => "logo-mark-md",
            LogoSize::Lg => "logo-mark-lg",
            LogoSize::Xl => "logo-mark-xl",
        }
    }
}

#[component]
pub fn Logo(
    #[props(default)] size: LogoSize,
    /// Collapsed sidebars show only the compass mark
    #[props(default = true)]
    show_text: bool,
) -> Element {
    rsx! {
        div { class: "logo fade-in-left",
            if show_text {
                span { class: "logo-text {size.text_class()}",
                    span { class: "logo-tour", "TOUR" }
                    span { class: "logo-ails", "AILS" }
                }
            } else {
                span { class: "logo-mark {size.mark_class()}", "\u{1F9ED}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_map_to_classes() {
        assert_eq!(LogoSize::default(), LogoSize::Md);
        assert_eq!(LogoSize::Sm.text_class(), "logo-text-sm");
        assert_eq!(LogoSize::Xl.text_class(), "logo-text-xl");
        assert_eq!(LogoSize::Lg.mark_class(), "logo-mark-lg");
    }
}
