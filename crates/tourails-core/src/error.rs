//! Error types for Tourails

use thiserror::Error;

use crate::onboarding::OnboardingStep;

/// Main error type for Tourails state operations.
///
/// Everything here is UI-level validation; none of it is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// Forward transition attempted while the step's gate is closed
    #[error("Cannot leave {step}: {reason}")]
    StepGated {
        step: OnboardingStep,
        reason: &'static str,
    },

    /// Backward transition attempted from the first step
    #[error("Already at the first onboarding step")]
    AtFirstStep,

    /// Interest selection is full
    #[error("At most {0} interests can be selected")]
    InterestLimit(usize),

    /// Region tag not in the region list
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Category label not in the category list
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Privacy setting id not found
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// Toggle attempted on a setting that holds a choice, not a switch
    #[error("Setting is not a switch: {0}")]
    NotASwitch(String),

    /// Required form field left blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Email field does not look like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Terms of service checkbox not ticked
    #[error("You must accept the terms to continue")]
    TermsNotAccepted,
}

/// Result type alias using TourError
pub type TourResult<T> = Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TourError::UnknownRegion("atlantis".to_string());
        assert_eq!(format!("{}", err), "Unknown region: atlantis");

        let err = TourError::StepGated {
            step: OnboardingStep::Interests,
            reason: "select at least one interest",
        };
        assert_eq!(
            err.to_string(),
            "Cannot leave Interests: select at least one interest"
        );
    }

    #[test]
    fn test_missing_field_display() {
        assert_eq!(TourError::MissingField("Email").to_string(), "Email is required");
    }
}
