//! Transport primitives for the token exchange.
//!
//! The module exposes [`TokenHttpClient`] so downstream crates (and tests) can swap the HTTP
//! stack without touching the flow logic. The gate hands each call a fully-formed
//! [`TokenHttpRequest`] and expects the raw status + body back; JSON classification happens
//! above the transport.

// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Timeout applied when no explicit value is configured.
pub const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::from_secs(30);

/// Boxed future returned by [`TokenHttpClient::post_form`].
pub type TokenHttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TokenHttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of POSTing a token request.
///
/// Implementations must be `Send + Sync + 'static` so one instance can be shared across every
/// in-flight request. They must not retry: a failed call is reported once as
/// [`TransportError`], and any response that arrives (whatever its status) is returned as-is.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` as an `application/x-www-form-urlencoded` POST.
	fn post_form(&self, request: TokenHttpRequest) -> TokenHttpFuture<'_>;
}

/// Outbound token request: endpoint plus ordered form parameters.
#[derive(Clone)]
pub struct TokenHttpRequest {
	/// Token endpoint URL.
	pub endpoint: Url,
	/// Form parameters, in wire order.
	pub form: Vec<(&'static str, String)>,
}
impl TokenHttpRequest {
	/// Returns the value of the first form parameter named `key`.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.form.iter().find(|(name, _)| *name == key).map(|(_, value)| value.as_str())
	}
}
impl Debug for TokenHttpRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let names = self.form.iter().map(|(name, _)| *name).collect::<Vec<_>>();

		f.debug_struct("TokenHttpRequest")
			.field("endpoint", &self.endpoint.as_str())
			.field("form_keys", &names)
			.finish()
	}
}

/// Raw response captured from the token endpoint.
#[derive(Clone, Debug)]
pub struct TokenHttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token requests should not follow redirects; token endpoints answer directly. Configure any
/// custom [`ReqwestClient`] passed to [`ReqwestHttpClient::with_client`] the same way and give it
/// a bounded timeout, since the gate itself never cancels an exchange.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client using [`DEFAULT_TOKEN_TIMEOUT`].
	pub fn new() -> Result<Self> {
		Self::with_timeout(DEFAULT_TOKEN_TIMEOUT)
	}

	/// Builds a client with redirects disabled and the provided request timeout.
	pub fn with_timeout(timeout: Duration) -> Result<Self> {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.timeout(timeout)
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	fn post_form(&self, request: TokenHttpRequest) -> TokenHttpFuture<'_> {
		Box::pin(async move {
			let response = self
				.0
				.post(request.endpoint)
				.header(reqwest::header::ACCEPT, "application/json")
				.form(&request.form)
				.send()
				.await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(TokenHttpResponse { status, body })
		})
	}
}
