//! Onboarding wizard state.
//!
//! Four steps walked in order: AccountType, ProfilePhoto, Interests,
//! Preferences. Leaving AccountType needs a chosen account type and leaving
//! Interests needs at least one interest; the other two steps are open.
//! Going back works from anywhere but the first step. Advancing from the
//! last step completes the flow.

use std::fmt;

use crate::error::{TourError, TourResult};
use crate::types::{AccountType, Interest};

/// Most interests a user may pick
pub const MAX_INTERESTS: usize = 8;
/// Longest bio, in characters
pub const MAX_BIO_CHARS: usize = 200;

/// A wizard step. Numbered 1 through 4 for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum OnboardingStep {
    #[default]
    AccountType,
    ProfilePhoto,
    Interests,
    Preferences,
}

impl OnboardingStep {
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::AccountType,
            OnboardingStep::ProfilePhoto,
            OnboardingStep::Interests,
            OnboardingStep::Preferences,
        ]
    }

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            OnboardingStep::AccountType => 1,
            OnboardingStep::ProfilePhoto => 2,
            OnboardingStep::Interests => 3,
            OnboardingStep::Preferences => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::AccountType => "Account Type",
            OnboardingStep::ProfilePhoto => "Profile Photo",
            OnboardingStep::Interests => "Interests",
            OnboardingStep::Preferences => "Preferences",
        }
    }

    /// Icon shown in the progress dot until the step is passed
    pub fn icon(&self) -> &'static str {
        match self {
            OnboardingStep::AccountType => "\u{1F464}",
            OnboardingStep::ProfilePhoto => "\u{1F4F7}",
            OnboardingStep::Interests => "\u{1F9ED}",
            OnboardingStep::Preferences => "\u{1F465}",
        }
    }

    pub fn next(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::AccountType => Some(OnboardingStep::ProfilePhoto),
            OnboardingStep::ProfilePhoto => Some(OnboardingStep::Interests),
            OnboardingStep::Interests => Some(OnboardingStep::Preferences),
            OnboardingStep::Preferences => None,
        }
    }

    pub fn previous(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::AccountType => None,
            OnboardingStep::ProfilePhoto => Some(OnboardingStep::AccountType),
            OnboardingStep::Interests => Some(OnboardingStep::ProfilePhoto),
            OnboardingStep::Preferences => Some(OnboardingStep::Interests),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of a successful forward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to this step
    Step(OnboardingStep),
    /// Left the last step; the flow is done
    Complete,
}

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnboardingState {
    step: OnboardingStep,
    account_type: Option<AccountType>,
    /// `data:` URI of the uploaded photo
    profile_image: Option<String>,
    /// Selection order is kept for display
    interests: Vec<Interest>,
    bio: String,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Bio length in characters, for the `n/200` counter
    pub fn bio_len(&self) -> usize {
        self.bio.chars().count()
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Why the current step cannot be left, if it cannot
    fn gate(&self) -> Option<&'static str> {
        match self.step {
            OnboardingStep::AccountType if self.account_type.is_none() => {
                Some("choose an account type")
            }
            OnboardingStep::Interests if self.interests.is_empty() => {
                Some("select at least one interest")
            }
            _ => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.gate().is_none()
    }

    /// Move forward one step, or complete from the last step.
    pub fn advance(&mut self) -> TourResult<Advance> {
        if let Some(reason) = self.gate() {
            return Err(TourError::StepGated {
                step: self.step,
                reason,
            });
        }

        match self.step.next() {
            Some(next) => {
                tracing::debug!(from = %self.step, to = %next, "Onboarding advanced");
                self.step = next;
                Ok(Advance::Step(next))
            }
            None => {
                tracing::info!(
                    account_type = ?self.account_type,
                    interests = self.interests.len(),
                    has_photo = self.profile_image.is_some(),
                    "Onboarding complete"
                );
                Ok(Advance::Complete)
            }
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    /// Move back one step. Answers already given are kept.
    pub fn back(&mut self) -> TourResult<OnboardingStep> {
        let previous = self.step.previous().ok_or(TourError::AtFirstStep)?;
        tracing::debug!(from = %self.step, to = %previous, "Onboarding went back");
        self.step = previous;
        Ok(previous)
    }

    pub fn select_account_type(&mut self, account_type: AccountType) {
        self.account_type = Some(account_type);
    }

    pub fn set_profile_image(&mut self, data_uri: Option<String>) {
        self.profile_image = data_uri;
    }

    /// Remove the interest if selected, otherwise add it while there is
    /// room. Returns whether it is selected afterwards.
    pub fn toggle_interest(&mut self, interest: Interest) -> TourResult<bool> {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
            return Ok(false);
        }
        if self.interests.len() >= MAX_INTERESTS {
            return Err(TourError::InterestLimit(MAX_INTERESTS));
        }
        self.interests.push(interest);
        Ok(true)
    }

    /// Store the bio, cut to [`MAX_BIO_CHARS`] characters.
    pub fn set_bio(&mut self, bio: &str) {
        self.bio = bio.chars().take(MAX_BIO_CHARS).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_account_type() {
        let state = OnboardingState::new();
        assert_eq!(state.step(), OnboardingStep::AccountType);
        assert_eq!(state.step().number(), 1);
        assert!(!state.can_go_back());
    }

    #[test]
    fn step_one_needs_account_type() {
        let mut state = OnboardingState::new();
        assert!(!state.can_advance());
        assert!(matches!(
            state.advance(),
            Err(TourError::StepGated {
                step: OnboardingStep::AccountType,
                ..
            })
        ));
        assert_eq!(state.step(), OnboardingStep::AccountType);

        state.select_account_type(AccountType::Couple);
        assert_eq!(
            state.advance(),
            Ok(Advance::Step(OnboardingStep::ProfilePhoto))
        );
    }

    #[test]
    fn photo_step_is_optional() {
        let mut state = OnboardingState::new();
        state.select_account_type(AccountType::Traveler);
        state.advance().unwrap();
        assert!(state.can_advance());
        assert_eq!(state.advance(), Ok(Advance::Step(OnboardingStep::Interests)));
    }

    #[test]
    fn step_three_needs_an_interest() {
        let mut state = OnboardingState::new();
        state.select_account_type(AccountType::Guide);
        state.advance().unwrap();
        state.advance().unwrap();

        assert!(state.advance().is_err());
        state.toggle_interest(Interest::Art).unwrap();
        assert_eq!(state.advance(), Ok(Advance::Step(OnboardingStep::Preferences)));
    }

    #[test]
    fn last_step_completes() {
        let mut state = OnboardingState::new();
        state.select_account_type(AccountType::Group);
        state.advance().unwrap();
        state.advance().unwrap();
        state.toggle_interest(Interest::Beach).unwrap();
        state.advance().unwrap();

        assert!(state.step().is_last());
        assert_eq!(state.advance(), Ok(Advance::Complete));
        assert_eq!(state.step(), OnboardingStep::Preferences);
    }

    #[test]
    fn back_is_refused_only_from_first_step() {
        let mut state = OnboardingState::new();
        assert_eq!(state.back(), Err(TourError::AtFirstStep));

        state.select_account_type(AccountType::Traveler);
        state.advance().unwrap();
        assert_eq!(state.back(), Ok(OnboardingStep::AccountType));
        // the answer survives going back
        assert_eq!(state.account_type(), Some(AccountType::Traveler));
    }

    #[test]
    fn back_ignores_gates() {
        let mut state = OnboardingState::new();
        state.select_account_type(AccountType::Traveler);
        state.advance().unwrap();
        state.advance().unwrap();
        assert!(!state.can_advance());
        assert!(state.can_go_back());
        assert_eq!(state.back(), Ok(OnboardingStep::ProfilePhoto));
    }

    #[test]
    fn interests_cap_at_eight() {
        let mut state = OnboardingState::new();
        for interest in &Interest::all()[..MAX_INTERESTS] {
            assert_eq!(state.toggle_interest(*interest), Ok(true));
        }
        assert_eq!(
            state.toggle_interest(Interest::LuxuryTravel),
            Err(TourError::InterestLimit(8))
        );
        assert_eq!(state.interests().len(), 8);

        // removing one frees a slot
        assert_eq!(state.toggle_interest(Interest::Adventure), Ok(false));
        assert_eq!(state.toggle_interest(Interest::LuxuryTravel), Ok(true));
        assert_eq!(state.interests().last(), Some(&Interest::LuxuryTravel));
    }

    #[test]
    fn bio_is_cut_to_two_hundred_chars() {
        let mut state = OnboardingState::new();
        state.set_bio(&"\u{00E9}".repeat(250));
        assert_eq!(state.bio_len(), MAX_BIO_CHARS);

        state.set_bio("Love slow travel");
        assert_eq!(state.bio(), "Love slow travel");
        assert_eq!(state.bio_len(), 16);
    }

    #[test]
    fn photo_can_be_removed() {
        let mut state = OnboardingState::new();
        state.set_profile_image(Some("data:image/png;base64,AAAA".into()));
        assert!(state.profile_image().is_some());
        state.set_profile_image(None);
        assert_eq!(state.profile_image(), None);
    }
}
