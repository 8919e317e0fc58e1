//! Provider-facing endpoint metadata.
//!
//! [`ProviderEndpoints`] holds the validated authorize + token URLs the gate talks to. Both must
//! use HTTPS; plain HTTP is only accepted for loopback hosts so local mock providers work.

/// Builder API for assembling provider endpoints.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Endpoint pair declared by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderEndpoints {
	/// Authorization endpoint the user agent is redirected to.
	pub authorize: Url,
	/// Token endpoint used for the authorization-code exchange.
	pub token: Url,
}
impl ProviderEndpoints {
	/// Creates a new builder.
	pub fn builder() -> ProviderEndpointsBuilder {
		ProviderEndpointsBuilder::default()
	}
}
