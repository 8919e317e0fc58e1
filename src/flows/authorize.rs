//! Authorize-endpoint redirect construction.

// self
use crate::{
	_prelude::*,
	config::Credentials,
	error::ConfigError,
	flows::Gate,
	http::TokenHttpClient,
	obs::{FlowKind, FlowSpan},
};

/// Scheme + host of the inbound request, used to derive the OAuth callback URL.
///
/// The host header is taken as-is; it is not checked against an allow-list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackOrigin {
	/// Whether the inbound connection was secure.
	pub secure: bool,
	/// Raw host header (may include a port).
	pub host: String,
}
impl CallbackOrigin {
	/// Creates an origin from an explicit security flag and host.
	pub fn new(secure: bool, host: impl Into<String>) -> Self {
		Self { secure, host: host.into() }
	}

	/// Returns `scheme://host` with no path component.
	///
	/// Fails when the host cannot stand alone as a URL authority (empty, carries a path,
	/// credentials, query, or fragment) or when the URL parser would rewrite it. Hostname case is
	/// the only rewrite tolerated.
	pub fn callback_url(&self) -> Result<String> {
		let scheme = if self.secure { "https" } else { "http" };
		let callback = format!("{scheme}://{}", self.host);
		let invalid = || ConfigError::InvalidCallbackHost { host: self.host.clone() };
		let parsed = Url::parse(&callback).map_err(|_| invalid())?;

		if parsed.path() != "/"
			|| parsed.query().is_some()
			|| parsed.fragment().is_some()
			|| !parsed.username().is_empty()
			|| parsed.password().is_some()
			|| !parsed.as_str().trim_end_matches('/').eq_ignore_ascii_case(&callback)
		{
			return Err(invalid().into());
		}

		Ok(callback)
	}
}

/// Appends `response_type=code`, `client_id`, and `redirect_uri` to the authorize endpoint.
pub fn build_authorize_url(endpoint: &Url, client_id: &str, callback_url: &str) -> Url {
	let mut url = endpoint.clone();
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair("response_type", "code");
	pairs.append_pair("client_id", client_id);
	pairs.append_pair("redirect_uri", callback_url);

	drop(pairs);

	url
}

impl<C> Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Builds the provider authorize URL for `origin`, using the currently configured client id.
	pub fn authorize_url(&self, origin: &CallbackOrigin) -> Result<Url> {
		let credentials = Credentials::require(self.config.as_ref())?;

		self.authorize_url_with(&credentials, origin)
	}

	pub(crate) fn authorize_url_with(
		&self,
		credentials: &Credentials,
		origin: &CallbackOrigin,
	) -> Result<Url> {
		let span = FlowSpan::begin(FlowKind::Authorize, "authorize_url");
		let _guard = span.entered();
		let url = origin.callback_url().map(|callback| {
			build_authorize_url(&self.endpoints.authorize, &credentials.client_id, &callback)
		});

		span.finish(url)
	}
}
