//! Gate-level error types shared across flows, transports, and the web layer.

// self
use crate::_prelude::*;

/// Gate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical gate error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider answered the token request with an `error` field.
	#[error(transparent)]
	Provider(#[from] AuthError),
	/// Transport failure (DNS, TCP, TLS, timeout, unreadable body).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and validation failures raised by the gate.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Credentials vanished between the setup check and the token exchange.
	#[error("Client credential `{key}` is not configured.")]
	MissingCredential {
		/// Configuration key that could not be resolved.
		key: &'static str,
	},
	/// Provider endpoints failed validation.
	#[error(transparent)]
	InvalidEndpoints(#[from] crate::provider::ProviderEndpointsError),
	/// Inbound host header cannot form a callback URL.
	#[error("Host `{host}` cannot form a callback URL.")]
	InvalidCallbackHost {
		/// Raw host header value.
		host: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Error reported by the provider inside an otherwise readable token response.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Provider rejected the token request: {message}.")]
pub struct AuthError {
	/// Value of the provider's `error` field.
	pub message: String,
	/// Value of the provider's `error_description` field, when supplied.
	pub description: Option<String>,
}
impl AuthError {
	/// Creates a new provider error carrying the `error` field value.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into(), description: None }
	}

	/// Attaches the provider's `error_description`.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}
}

/// Transport-level failures (network, timeout, unreadable body).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The token endpoint did not answer within the configured timeout.
	#[error("Request timed out while calling the token endpoint.")]
	Timeout,
	/// Token endpoint responded with a body that is not the expected JSON.
	#[error("Token endpoint returned malformed JSON.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Timeout } else { Self::network(e) }
	}
}
