//! Drop-in OAuth 2.0 authorization-code gate for Salesforce-style providers: setup detection,
//! authorize redirects, and token exchange behind one axum router.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod provider;
#[cfg(feature = "server")] pub mod web;
#[cfg(feature = "reqwest")]
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests.

	pub use crate::_prelude::*;

	// self
	use crate::{
		config::{ConfigSource, MapSource},
		flows::Gate,
		http::ReqwestHttpClient,
		provider::ProviderEndpoints,
	};

	/// Gate type alias used by reqwest-backed integration tests.
	pub type ReqwestTestGate = Gate<ReqwestHttpClient>;

	/// Client identifier seeded by [`configured_source`].
	pub const TEST_CLIENT_ID: &str = "client-it";
	/// Client secret seeded by [`configured_source`].
	pub const TEST_CLIENT_SECRET: &str = "secret-it";

	/// Builds provider endpoints rooted at `base` (typically an `httpmock` server URL).
	pub fn test_endpoints(base: &str) -> ProviderEndpoints {
		let base = base.trim_end_matches('/');

		ProviderEndpoints::builder()
			.authorize_endpoint(
				Url::parse(&format!("{base}/services/oauth2/authorize"))
					.expect("Test authorize endpoint should parse."),
			)
			.token_endpoint(
				Url::parse(&format!("{base}/services/oauth2/token"))
					.expect("Test token endpoint should parse."),
			)
			.build()
			.expect("Loopback test endpoints should pass validation.")
	}

	/// Returns a [`MapSource`] holding both test credentials.
	pub fn configured_source() -> Arc<MapSource> {
		Arc::new(
			MapSource::default()
				.with(crate::config::CLIENT_ID_KEY, TEST_CLIENT_ID)
				.with(crate::config::CLIENT_SECRET_KEY, TEST_CLIENT_SECRET),
		)
	}

	/// Constructs a [`Gate`] backed by the reqwest transport and the provided source.
	pub fn build_reqwest_test_gate(base: &str, source: Arc<MapSource>) -> ReqwestTestGate {
		let source: Arc<dyn ConfigSource> = source;
		let http_client = ReqwestHttpClient::with_timeout(std::time::Duration::from_secs(5))
			.expect("Failed to build Reqwest client for tests.");

		Gate::with_http_client(test_endpoints(base), source, http_client)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::Deserialize;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(feature = "server")] use {color_eyre as _, tracing_subscriber as _};
#[cfg(test)] use {httpmock as _, tower as _};
