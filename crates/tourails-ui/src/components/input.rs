//! Input Field Components
//!
//! Text inputs and textareas. Inputs can carry a leading icon and a
//! trailing slot (the show/hide password button sits there).

use dioxus::prelude::*;

/// Joins the base class with the optional icon/trailing modifiers and any
/// caller-supplied extras.
fn input_class(has_icon: bool, has_trailing: bool, extra: Option<&str>) -> String {
    let modifiers = [
        has_icon.then_some("has-icon"),
        has_trailing.then_some("has-trailing"),
        extra.filter(|e| !e.is_empty()),
    ];
    std::iter::once("input-field")
        .chain(modifiers.into_iter().flatten())
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn FieldLabel(label: Option<String>, target: Option<String>) -> Element {
    match label {
        Some(text) => rsx! {
            label { class: "input-label", r#for: target, "{text}" }
        },
        None => rsx! {},
    }
}

/// Labelled text input.
///
/// ```rust,ignore
/// Input {
///     id: "signup-email".to_string(),
///     label: "Email".to_string(),
///     icon: "\u{2709}".to_string(),
///     input_type: "email".to_string(),
///     value: form.read().email.clone(),
///     oninput: move |v: String| form.write().email = v,
///     required: true,
/// }
/// ```
#[component]
pub fn Input(
    value: String,
    oninput: EventHandler<String>,
    placeholder: Option<String>,
    label: Option<String>,
    /// Glyph drawn inside the left edge
    icon: Option<String>,
    /// HTML input type
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    /// Id for label association; required when `label` is set
    id: Option<String>,
    class: Option<String>,
    /// Rendered inside the right edge
    trailing: Option<Element>,
) -> Element {
    let field_class = input_class(icon.is_some(), trailing.is_some(), class.as_deref());

    rsx! {
        div { class: "form-field",
            FieldLabel { label, target: id.clone() }
            div { class: "input-wrapper",
                if let Some(icon) = icon {
                    span { class: "input-icon", "{icon}" }
                }
                input {
                    id,
                    class: "{field_class}",
                    r#type: "{input_type}",
                    value: "{value}",
                    placeholder: placeholder.unwrap_or_default(),
                    required,
                    disabled,
                    oninput: move |e| oninput.call(e.value()),
                }
                if let Some(slot) = trailing {
                    div { class: "input-trailing", {slot} }
                }
            }
        }
    }
}

/// Multi-line input. With `max_chars` the browser enforces the limit and an
/// `n/max` counter is shown underneath.
#[component]
pub fn TextArea(
    value: String,
    oninput: EventHandler<String>,
    placeholder: Option<String>,
    label: Option<String>,
    #[props(default = 4)] rows: u32,
    max_chars: Option<usize>,
    id: Option<String>,
) -> Element {
    let count = value.chars().count();

    rsx! {
        div { class: "form-field",
            FieldLabel { label, target: id.clone() }
            textarea {
                id,
                class: "input-field textarea",
                rows: "{rows}",
                maxlength: max_chars.map(|m| m.to_string()),
                placeholder: placeholder.unwrap_or_default(),
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(max) = max_chars {
                p { class: "char-counter", "{count}/{max}" }
            }
        }
    }
}

/// Search box with a magnifier glyph. `class` lands on the wrapper, so
/// `search-lg` enlarges the whole control.
#[component]
pub fn SearchInput(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    class: Option<String>,
    trailing: Option<Element>,
) -> Element {
    let wrapper = match class.as_deref().filter(|c| !c.is_empty()) {
        Some(extra) => format!("search-input-wrapper {extra}"),
        None => "search-input-wrapper".to_string(),
    };

    rsx! {
        div { class: "{wrapper}",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(slot) = trailing {
                div { class: "input-trailing", {slot} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_class_reflects_slots() {
        assert_eq!(input_class(false, false, None), "input-field");
        assert_eq!(input_class(true, false, None), "input-field has-icon");
        assert_eq!(
            input_class(true, true, Some("glass")),
            "input-field has-icon has-trailing glass"
        );
    }

    #[test]
    fn empty_extra_class_is_ignored() {
        assert_eq!(input_class(false, true, Some("")), "input-field has-trailing");
    }
}
