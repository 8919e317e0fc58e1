//! Per-request state machine tying the setup check, authorize redirect, and exchange together.

// self
use crate::{
	_prelude::*,
	auth::TokenResponse,
	flows::{CallbackOrigin, Gate},
	http::TokenHttpClient,
};

/// What the index route should do for one request.
#[derive(Clone, Debug)]
pub enum Outcome {
	/// Credentials are missing; send the user to the setup route.
	Setup,
	/// No code yet; send the user to the provider's authorize URL.
	Authorize(Url),
	/// The code was exchanged successfully.
	Authenticated(TokenResponse),
}

impl<C> Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Runs the index flow for a single request.
	///
	/// Credentials are resolved once up front. Without them neither the authorize redirect nor
	/// the exchange runs. An empty `code` is treated as absent. The callback URL derived from
	/// `origin` doubles as the `redirect_uri` for both the authorize redirect and the exchange.
	pub async fn dispatch(&self, code: Option<&str>, origin: &CallbackOrigin) -> Result<Outcome> {
		let Some(credentials) = self.credentials() else {
			return Ok(Outcome::Setup);
		};

		match code.filter(|code| !code.is_empty()) {
			None => self.authorize_url_with(&credentials, origin).map(Outcome::Authorize),
			Some(code) => {
				let redirect_url = origin.callback_url()?;

				self.exchange_with(&credentials, code, &redirect_url)
					.await
					.map(Outcome::Authenticated)
			},
		}
	}
}
