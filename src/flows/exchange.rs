//! Authorization-code exchange against the provider's token endpoint.
//!
//! The gate sends exactly one POST per exchange. Whatever JSON comes back is classified by
//! shape alone: an `error` field yields [`Error::Provider`], anything else must carry the
//! recognized token fields. Network failures, timeouts, and unreadable bodies surface as
//! [`Error::Transport`] so callers can tell "retry later" apart from "fix the configuration".

// self
use crate::{
	_prelude::*,
	auth::TokenResponse,
	config::Credentials,
	flows::Gate,
	http::{TokenHttpClient, TokenHttpRequest},
	obs::{FlowKind, FlowSpan},
};

/// Grant type sent with every exchange.
pub const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

impl<C> Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges `code` for a [`TokenResponse`] using the currently configured credentials.
	///
	/// `redirect_url` must match the callback URL sent to the authorize endpoint.
	pub async fn exchange(&self, code: &str, redirect_url: &str) -> Result<TokenResponse> {
		let credentials = Credentials::require(self.config.as_ref())?;

		self.exchange_with(&credentials, code, redirect_url).await
	}

	pub(crate) async fn exchange_with(
		&self,
		credentials: &Credentials,
		code: &str,
		redirect_url: &str,
	) -> Result<TokenResponse> {
		let span = FlowSpan::begin(FlowKind::Exchange, "exchange");
		let result = span
			.instrument(async move {
				let request =
					token_request(&self.endpoints.token, credentials, code, redirect_url);
				let response = self.http_client.post_form(request).await?;

				TokenResponse::from_body(&response.body, Some(response.status))
			})
			.await;

		span.finish(result)
	}
}

/// Builds the token request form for an authorization-code exchange.
pub fn token_request(
	endpoint: &Url,
	credentials: &Credentials,
	code: &str,
	redirect_url: &str,
) -> TokenHttpRequest {
	TokenHttpRequest {
		endpoint: endpoint.clone(),
		form: vec![
			("grant_type", AUTHORIZATION_CODE_GRANT.into()),
			("code", code.into()),
			("client_id", credentials.client_id.clone()),
			("client_secret", credentials.client_secret.expose().into()),
			("redirect_uri", redirect_url.into()),
		],
	}
}
