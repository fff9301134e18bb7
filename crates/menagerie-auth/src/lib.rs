//! Menagerie Auth — password sign-up/sign-in, opaque session tokens,
//! and caller resolution.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, SignInInput, SignInOutput, SignUpInput};
