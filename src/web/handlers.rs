// crates.io
use axum::{
	extract::{Query, State},
	http::{HeaderMap, Uri},
	response::{Html, IntoResponse, Redirect, Response},
};
// self
use crate::{
	_prelude::*,
	flows::{Gate, Outcome, SetupOutcome},
	http::TokenHttpClient,
	web::{self, INDEX_PATH, SETUP_PATH, pages},
};

/// Query parameters accepted by the index route.
#[derive(Debug, Deserialize)]
pub struct IndexParams {
	/// Authorization code returned by the provider, absent on the first visit.
	pub code: Option<String>,
}

/// GET /
///
/// Redirects to `/setup` when credentials are missing, to the provider's authorize endpoint
/// when no code is present, and otherwise exchanges the code and renders the landing page.
pub async fn index<C>(
	State(gate): State<Gate<C>>,
	headers: HeaderMap,
	uri: Uri,
	Query(params): Query<IndexParams>,
) -> Response
where
	C: ?Sized + TokenHttpClient,
{
	let origin = web::callback_origin(&headers, &uri);

	match gate.dispatch(params.code.as_deref(), &origin).await {
		Ok(Outcome::Setup) => {
			tracing::info!("client credentials are not configured, redirecting to setup");

			Redirect::to(SETUP_PATH).into_response()
		},
		Ok(Outcome::Authorize(url)) => Redirect::to(url.as_str()).into_response(),
		Ok(Outcome::Authenticated(token)) => {
			tracing::info!(instance_url = %token.instance_url, "authorization code exchanged");

			Html(pages::landing(&token)).into_response()
		},
		Err(e) => e.into_response(),
	}
}

/// GET /setup
///
/// Redirects to `/` once credentials are configured; until then renders onboarding
/// instructions seeded with the app name guessed from the host.
pub async fn setup<C>(State(gate): State<Gate<C>>, headers: HeaderMap, uri: Uri) -> Response
where
	C: ?Sized + TokenHttpClient,
{
	let origin = web::callback_origin(&headers, &uri);

	match gate.setup(&origin) {
		SetupOutcome::Configured => Redirect::to(INDEX_PATH).into_response(),
		SetupOutcome::Page(page) => Html(pages::setup(&page)).into_response(),
	}
}
