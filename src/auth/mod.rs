pub mod cookies;
pub mod drafts;
pub mod service;
pub mod sessions;
pub mod token;

pub use service::{AuthService, CurrentUser, SignupOutcome};
