// self
use crate::{_prelude::*, auth::Secret, config::ConfigSource, error::ConfigError};

/// Configuration key holding the OAuth client identifier (consumer key).
pub const CLIENT_ID_KEY: &str = "consumer.key";
/// Configuration key holding the OAuth client secret (consumer secret).
pub const CLIENT_SECRET_KEY: &str = "consumer.secret";

/// Client identifier + secret pair resolved from a [`ConfigSource`].
#[derive(Clone)]
pub struct Credentials {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: Secret,
}
impl Credentials {
	/// Resolves both credentials, returning `None` when either is absent.
	pub fn load(source: &dyn ConfigSource) -> Option<Self> {
		let client_id = lookup_present(source, CLIENT_ID_KEY)?;
		let client_secret = lookup_present(source, CLIENT_SECRET_KEY)?;

		Some(Self { client_id, client_secret: Secret::new(client_secret) })
	}

	/// Resolves both credentials, naming the first missing key on failure.
	pub fn require(source: &dyn ConfigSource) -> Result<Self> {
		let client_id = lookup_present(source, CLIENT_ID_KEY)
			.ok_or(ConfigError::MissingCredential { key: CLIENT_ID_KEY })?;
		let client_secret = lookup_present(source, CLIENT_SECRET_KEY)
			.ok_or(ConfigError::MissingCredential { key: CLIENT_SECRET_KEY })?;

		Ok(Self { client_id, client_secret: Secret::new(client_secret) })
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.finish()
	}
}

/// Returns `true` only when both the client identifier and secret are configured.
pub fn is_configured(source: &dyn ConfigSource) -> bool {
	lookup_present(source, CLIENT_ID_KEY).is_some()
		&& lookup_present(source, CLIENT_SECRET_KEY).is_some()
}

// Blank values count as absent.
fn lookup_present(source: &dyn ConfigSource, key: &str) -> Option<String> {
	source.lookup(key).filter(|value| !value.trim().is_empty())
}
