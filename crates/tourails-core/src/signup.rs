//! Signup form state.

use std::time::Duration;

use crate::error::{TourError, TourResult};
use crate::password::PasswordStrength;

/// Default simulated round trip before moving on to onboarding
pub const DEFAULT_SIGNUP_DELAY: Duration = Duration::from_millis(1500);

/// Fields of the "Create account" form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub accepted_terms: bool,
    pub show_password: bool,
}

impl SignupForm {
    /// Same checks a browser applies to `required` / `type=email` inputs.
    pub fn validate(&self) -> TourResult<()> {
        if self.name.trim().is_empty() {
            return Err(TourError::MissingField("Full Name"));
        }
        if self.email.trim().is_empty() {
            return Err(TourError::MissingField("Email"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(TourError::InvalidEmail(self.email.trim().to_string()));
        }
        if self.password.is_empty() {
            return Err(TourError::MissingField("Password"));
        }
        if !self.accepted_terms {
            return Err(TourError::TermsNotAccepted);
        }
        Ok(())
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::of(&self.password)
    }

    /// The meter only appears once something is typed
    pub fn shows_meter(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }
}

/// Text on both sides of a single `@`, no whitespace.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            password: "hunter2".into(),
            accepted_terms: true,
            show_password: false,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.validate(), Err(TourError::MissingField("Full Name")));

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate(), Err(TourError::MissingField("Email")));

        let mut form = filled();
        form.password.clear();
        assert_eq!(form.validate(), Err(TourError::MissingField("Password")));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["john", "@example.com", "john@", "jo hn@example.com", "a@b@c"] {
            let mut form = filled();
            form.email = bad.into();
            assert!(
                matches!(form.validate(), Err(TourError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn terms_must_be_accepted() {
        let mut form = filled();
        form.accepted_terms = false;
        assert_eq!(form.validate(), Err(TourError::TermsNotAccepted));
    }

    #[test]
    fn weak_password_does_not_block() {
        let mut form = filled();
        form.password = "abc".into();
        assert_eq!(form.strength(), PasswordStrength::TooWeak);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn meter_and_input_type() {
        let mut form = SignupForm::default();
        assert!(!form.shows_meter());
        assert_eq!(form.password_input_type(), "password");
        form.password = "x".into();
        form.show_password = true;
        assert!(form.shows_meter());
        assert_eq!(form.password_input_type(), "text");
    }
}
