//! Step Progress Component
//!
//! Row of numbered dots joined by connectors. Finished steps show a check,
//! the current one is enlarged, later ones are muted.

use dioxus::prelude::*;
use tourails_core::OnboardingStep;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DotState {
    Done,
    Current,
    Upcoming,
}

impl DotState {
    fn class(&self) -> &'static str {
        match self {
            DotState::Done => "step-dot done",
            DotState::Current => "step-dot current",
            DotState::Upcoming => "step-dot",
        }
    }
}

/// State of `step`'s dot while the wizard sits on `current`
pub fn dot_state(step: OnboardingStep, current: OnboardingStep) -> DotState {
    match step.number().cmp(&current.number()) {
        std::cmp::Ordering::Less => DotState::Done,
        std::cmp::Ordering::Equal => DotState::Current,
        std::cmp::Ordering::Greater => DotState::Upcoming,
    }
}

#[component]
pub fn StepProgress(current: OnboardingStep) -> Element {
    rsx! {
        ol { class: "step-progress", "aria-label": "Setup progress",
            for step in OnboardingStep::all().iter().copied() {
                li { key: "{step.number()}", class: "step-progress-item",
                    {
                        let state = dot_state(step, current);
                        rsx! {
                            div {
                                class: state.class(),
                                title: "{step}",
                                "aria-current": if state == DotState::Current { "step" } else { "false" },
                                if state == DotState::Done { "\u{2713}" } else { "{step.icon()}" }
                            }
                        }
                    }
                    if !step.is_last() {
                        div { class: if step.number() < current.number() { "step-connector done" } else { "step-connector" } }
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
    fn dots_track_the_current_step() {
        let current = OnboardingStep::Interests;
        assert_eq!(dot_state(OnboardingStep::AccountType, current), DotState::Done);
        assert_eq!(dot_state(OnboardingStep::ProfilePhoto, current), DotState::Done);
        assert_eq!(dot_state(OnboardingStep::Interests, current), DotState::Current);
        assert_eq!(dot_state(OnboardingStep::Preferences, current), DotState::Upcoming);
    }
}
