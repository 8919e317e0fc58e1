//! Request flows powered by the [`Gate`] facade.

pub mod authorize;
pub mod dispatch;
pub mod exchange;
pub mod setup;

pub use authorize::*;
pub use dispatch::*;
pub use exchange::*;
pub use setup::*;

// self
use crate::{
	_prelude::*,
	config::{self, ConfigSource, Credentials},
	http::TokenHttpClient,
	provider::ProviderEndpoints,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Hosting-platform suffix used when none is configured.
pub const DEFAULT_HOSTING_SUFFIX: &str = ".herokuapp.com";

/// Coordinates the authorization-code flow against a single provider.
///
/// The gate is built once at startup and shared by reference across requests. It owns the HTTP
/// client, the validated provider endpoints, and the configuration source that credentials are
/// read from on every call. Nothing in it is mutated after construction.
pub struct Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client used for the token exchange.
	pub http_client: Arc<C>,
	/// Source consulted for client credentials on every request.
	pub config: Arc<dyn ConfigSource>,
	/// Provider authorize + token endpoints.
	pub endpoints: ProviderEndpoints,
	/// Domain suffix stripped from the request host when guessing an app name.
	pub hosting_suffix: String,
}
impl<C> Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a gate that reuses the caller-provided transport.
	pub fn with_http_client(
		endpoints: ProviderEndpoints,
		config: Arc<dyn ConfigSource>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			config,
			endpoints,
			hosting_suffix: DEFAULT_HOSTING_SUFFIX.into(),
		}
	}

	/// Overrides the hosting-platform suffix used by the setup page.
	pub fn with_hosting_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.hosting_suffix = suffix.into();

		self
	}

	/// Returns `true` when both client credentials are configured right now.
	pub fn is_configured(&self) -> bool {
		config::is_configured(self.config.as_ref())
	}

	/// Resolves the current credentials, if configured.
	pub fn credentials(&self) -> Option<Credentials> {
		Credentials::load(self.config.as_ref())
	}
}
#[cfg(feature = "reqwest")]
impl Gate<ReqwestHttpClient> {
	/// Creates a gate with its own reqwest transport bounded by `timeout`.
	pub fn new(
		endpoints: ProviderEndpoints,
		config: Arc<dyn ConfigSource>,
		timeout: Duration,
	) -> Result<Self> {
		Ok(Self::with_http_client(endpoints, config, ReqwestHttpClient::with_timeout(timeout)?))
	}
}
impl<C> Clone for Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			config: self.config.clone(),
			endpoints: self.endpoints.clone(),
			hosting_suffix: self.hosting_suffix.clone(),
		}
	}
}
impl<C> Debug for Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Gate")
			.field("endpoints", &self.endpoints)
			.field("hosting_suffix", &self.hosting_suffix)
			.field("configured", &self.is_configured())
			.finish()
	}
}
