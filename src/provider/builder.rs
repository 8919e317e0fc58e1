// self
use crate::{_prelude::*, provider::ProviderEndpoints};

/// Errors raised while constructing or validating provider endpoints.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ProviderEndpointsError {
	/// Authorization endpoint is required.
	#[error("Missing authorize endpoint.")]
	MissingAuthorizeEndpoint,
	/// Token endpoint is required.
	#[error("Missing token endpoint.")]
	MissingTokenEndpoint,
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Endpoints must carry a host.
	#[error("The {endpoint} endpoint has no host: {url}.")]
	MissingHost {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Builder for [`ProviderEndpoints`] values.
#[derive(Debug, Default)]
pub struct ProviderEndpointsBuilder {
	/// Authorization endpoint.
	pub authorize_endpoint: Option<Url>,
	/// Token endpoint.
	pub token_endpoint: Option<Url>,
}
impl ProviderEndpointsBuilder {
	/// Sets the authorize endpoint.
	pub fn authorize_endpoint(mut self, url: Url) -> Self {
		self.authorize_endpoint = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting endpoints.
	pub fn build(self) -> Result<ProviderEndpoints, ProviderEndpointsError> {
		let authorize =
			self.authorize_endpoint.ok_or(ProviderEndpointsError::MissingAuthorizeEndpoint)?;
		let token = self.token_endpoint.ok_or(ProviderEndpointsError::MissingTokenEndpoint)?;

		validate_endpoint("authorize", &authorize)?;
		validate_endpoint("token", &token)?;

		Ok(ProviderEndpoints { authorize, token })
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ProviderEndpointsError> {
	let Some(host) = url.host_str() else {
		return Err(ProviderEndpointsError::MissingHost { endpoint: name, url: url.to_string() });
	};

	match url.scheme() {
		"https" => Ok(()),
		"http" if is_loopback(host) => Ok(()),
		_ => Err(ProviderEndpointsError::InsecureEndpoint { endpoint: name, url: url.to_string() }),
	}
}

fn is_loopback(host: &str) -> bool {
	host.eq_ignore_ascii_case("localhost") || host == "127.0.0.1" || host == "[::1]"
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse endpoint fixture.")
	}

	#[test]
	fn rejects_missing_and_insecure_endpoints() {
		let err = ProviderEndpoints::builder()
			.token_endpoint(url("https://example.com/token"))
			.build()
			.expect_err("Builder should require an authorize endpoint.");

		assert_eq!(err, ProviderEndpointsError::MissingAuthorizeEndpoint);

		let err = ProviderEndpoints::builder()
			.authorize_endpoint(url("https://example.com/authorize"))
			.token_endpoint(url("http://example.com/token"))
			.build()
			.expect_err("Builder should reject plain HTTP on public hosts.");

		assert!(matches!(err, ProviderEndpointsError::InsecureEndpoint { endpoint: "token", .. }));
	}

	#[test]
	fn accepts_loopback_http() {
		let endpoints = ProviderEndpoints::builder()
			.authorize_endpoint(url("http://127.0.0.1:8080/authorize"))
			.token_endpoint(url("http://localhost:8080/token"))
			.build()
			.expect("Loopback endpoints should be accepted.");

		assert_eq!(endpoints.token.as_str(), "http://localhost:8080/token");
	}
}
