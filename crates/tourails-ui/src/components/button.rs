//! Button Components
//!
//! One `Button` with a variant and a size. The variant picks colors and
//! hover treatment, the size picks height and padding:
//! - Default / Secondary / Destructive: solid fills
//! - Outline / Ghost / Link: low-emphasis actions
//! - Gradient / Accent / Hero: calls to action
//! - Glass / HeroOutline: over imagery

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid primary fill with glow on hover
    #[default]
    Default,
    Destructive,
    /// Bordered, transparent background
    Outline,
    Secondary,
    /// No chrome until hovered
    Ghost,
    /// Text link styling
    Link,
    /// Primary-to-secondary gradient, grows on hover
    Gradient,
    Accent,
    /// Frosted translucent fill for use over photos
    Glass,
    /// The loudest call to action
    Hero,
    HeroOutline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Destructive => "btn-destructive",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Link => "btn-link",
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Accent => "btn-accent",
            ButtonVariant::Glass => "btn-glass",
            ButtonVariant::Hero => "btn-hero",
            ButtonVariant::HeroOutline => "btn-hero-outline",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Xl,
    /// Square, for a single glyph
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "btn-size-default",
            ButtonSize::Sm => "btn-size-sm",
            ButtonSize::Lg => "btn-size-lg",
            ButtonSize::Xl => "btn-size-xl",
            ButtonSize::Icon => "btn-size-icon",
        }
    }
}

/// Full class list: base, variant, size, then caller extras
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut class = format!("btn {} {}", variant.class(), size.class());
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Accessible label, for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Hero,
///         size: ButtonSize::Xl,
///         onclick: move |_| navigator.push(Route::Signup {}),
///         "Get Started Free"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Default.class(), "btn-default");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Gradient.class(), "btn-gradient");
        assert_eq!(ButtonVariant::Hero.class(), "btn-hero");
        assert_eq!(ButtonVariant::HeroOutline.class(), "btn-hero-outline");
    }

    #[test]
    fn button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }

    #[test]
    fn class_list_composition() {
        assert_eq!(
            button_class(ButtonVariant::Glass, ButtonSize::Xl, None),
            "btn btn-glass btn-size-xl"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Icon, Some("rounded-full")),
            "btn btn-ghost btn-size-icon rounded-full"
        );
        assert_eq!(
            button_class(ButtonVariant::Link, ButtonSize::Sm, Some("")),
            "btn btn-link btn-size-sm"
        );
    }
}
