//! Shared items related to user account control

mod errors;
mod role;
mod user;

pub use errors::{LoginError, SignupError};
pub use role::Role;
pub use user::{DisplayName, Email, UserInfo, WorkId};
