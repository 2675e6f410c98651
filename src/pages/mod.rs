//! Page components for Tourails.

mod community;
mod dashboard;
mod explore;
mod home;
mod messages;
mod not_found;
mod onboarding;
mod safety;
mod signup;

pub use community::Community;
pub use dashboard::Dashboard;
pub use explore::Explore;
pub use home::Home;
pub use messages::Messages;
pub use not_found::NotFound;
pub use onboarding::Onboarding;
pub use safety::Safety;
pub use signup::Signup;
