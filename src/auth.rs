//! Auth-domain models: redacted secrets, client credentials, and token responses.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::*;
