// crates.io
use clap::Parser;
// self
use crate::{
	_prelude::*, error::ConfigError, flows::DEFAULT_HOSTING_SUFFIX, provider::ProviderEndpoints,
};

/// Default Salesforce login authorize endpoint.
pub const DEFAULT_AUTHORIZE_ENDPOINT: &str =
	"https://login.salesforce.com/services/oauth2/authorize";
/// Default Salesforce login token endpoint.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://login.salesforce.com/services/oauth2/token";

/// Server bootstrap settings, read from flags or the environment.
///
/// Client credentials are deliberately absent: they are looked up per request through
/// [`ConfigSource`](crate::config::ConfigSource) so a deployment can be configured after boot.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
	/// The host interface to listen for incoming connections
	#[arg(short, long, env, default_value = "0.0.0.0")]
	pub interface: String,

	/// The host TCP port to listen for incoming connections
	#[arg(short, long, env, default_value_t = 9000)]
	pub port: u16,

	/// The provider's OAuth 2.0 authorize endpoint
	#[arg(long, env, default_value = DEFAULT_AUTHORIZE_ENDPOINT)]
	pub authorize_endpoint: Url,

	/// The provider's OAuth 2.0 token endpoint
	#[arg(long, env, default_value = DEFAULT_TOKEN_ENDPOINT)]
	pub token_endpoint: Url,

	/// Timeout in seconds for the outbound token exchange
	#[arg(long, env, default_value_t = 30)]
	pub token_timeout_secs: u64,

	/// Hosting-platform domain suffix stripped from the host when guessing an app name
	#[arg(long, env, default_value = DEFAULT_HOSTING_SUFFIX)]
	pub hosting_suffix: String,
}
impl Settings {
	/// Loads `.env` (when present) and parses flags + environment.
	pub fn load() -> Self {
		dotenvy::dotenv().ok();

		Self::parse()
	}

	/// Validated provider endpoints.
	pub fn endpoints(&self) -> Result<ProviderEndpoints> {
		ProviderEndpoints::builder()
			.authorize_endpoint(self.authorize_endpoint.clone())
			.token_endpoint(self.token_endpoint.clone())
			.build()
			.map_err(|e| ConfigError::from(e).into())
	}

	/// Bounded timeout applied to the token exchange.
	pub fn token_timeout(&self) -> Duration {
		Duration::from_secs(self.token_timeout_secs)
	}

	/// Socket address string handed to the listener.
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.interface, self.port)
	}
}
