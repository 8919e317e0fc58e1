//! Configuration surfaces: request-time credential lookups and server bootstrap settings.
//!
//! Credentials are resolved through [`ConfigSource`] on every request so operators can
//! configure a running deployment without restarting it. Server bootstrap values (bind address,
//! provider endpoints, timeouts) live in [`Settings`] when the `server` feature is enabled.

/// Client credential resolution and the setup probe.
pub mod credentials;
/// Server bootstrap settings parsed from flags and the environment.
#[cfg(feature = "server")]
pub mod settings;
/// Key/value configuration sources.
pub mod source;

pub use credentials::*;
#[cfg(feature = "server")] pub use settings::*;
pub use source::*;
