//! Onboarding wizard pieces.

mod account_type_card;
mod step_progress;

pub use account_type_card::AccountTypeCard;
pub use step_progress::{dot_state, DotState, StepProgress};
