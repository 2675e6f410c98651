//! Password Meter Component
//!
//! Four segments filled up to the score, colored by strength, with the
//! label underneath. Advisory only.

use dioxus::prelude::*;
use tourails_core::PasswordStrength;

/// Class for segment `index` (0-based) at the given strength
pub fn segment_class(strength: PasswordStrength, index: u8) -> String {
    if index < strength.score() {
        format!("meter-segment {}", strength.color_class())
    } else {
        "meter-segment".to_string()
    }
}

#[component]
pub fn PasswordMeter(strength: PasswordStrength) -> Element {
    rsx! {
        div { class: "password-meter expand-in",
            div { class: "meter-segments",
                for index in 0..4u8 {
                    div { key: "{index}", class: segment_class(strength, index) }
                }
            }
            p { class: "meter-label", "Password strength: {strength.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_fill_up_to_score() {
        let filled: Vec<bool> = (0..4)
            .map(|i| segment_class(PasswordStrength::Fair, i).contains("strength-fair"))
            .collect();
        assert_eq!(filled, vec![true, true, false, false]);
    }

    #[test]
    fn too_weak_fills_nothing() {
        for i in 0..4 {
            assert_eq!(segment_class(PasswordStrength::TooWeak, i), "meter-segment");
        }
    }
}
