//! Axum surface: `GET /` and `GET /setup` wired onto a shared [`Gate`].
//!
//! The router is the only place HTTP concerns live. Handlers translate request parts into a
//! [`CallbackOrigin`], call into the gate, and map its outcome (or error) onto a response.

/// HTTP rendering of gate errors.
pub mod error;
/// Route handlers.
pub mod handlers;
pub mod pages;

pub use handlers::*;

// crates.io
use axum::{
	Router,
	http::{HeaderMap, Uri, header::HOST},
	routing::get,
};
use tokio::net::TcpListener;
// self
use crate::{
	config::Settings,
	flows::{CallbackOrigin, Gate},
	http::TokenHttpClient,
};

/// Route serving the index flow.
pub const INDEX_PATH: &str = "/";
/// Route serving the setup/onboarding page.
pub const SETUP_PATH: &str = "/setup";

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds the application router around `gate`.
pub fn router<C>(gate: Gate<C>) -> Router
where
	C: ?Sized + TokenHttpClient,
{
	Router::new()
		.route(INDEX_PATH, get(handlers::index::<C>))
		.route(SETUP_PATH, get(handlers::setup::<C>))
		.with_state(gate)
}

/// Binds the configured address and serves `gate` until the listener fails.
pub async fn serve<C>(settings: &Settings, gate: Gate<C>) -> std::io::Result<()>
where
	C: ?Sized + TokenHttpClient,
{
	let listener = TcpListener::bind(settings.bind_address()).await?;

	tracing::info!(address = %listener.local_addr()?, "listening for requests");

	axum::serve(listener, router(gate)).await
}

/// Derives the callback origin from request parts.
///
/// A request counts as secure when its URI carries the `https` scheme or the first
/// `X-Forwarded-Proto` entry says `https`. The host comes from the `Host` header, falling back
/// to the URI authority (HTTP/2). A missing host yields an empty one, which only fails once a
/// callback URL is actually needed.
pub fn callback_origin(headers: &HeaderMap, uri: &Uri) -> CallbackOrigin {
	let forwarded_https = headers
		.get(X_FORWARDED_PROTO)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.split(',').next())
		.is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"));
	let secure = forwarded_https || uri.scheme_str() == Some("https");
	let host = headers
		.get(HOST)
		.and_then(|value| value.to_str().ok())
		.map(str::to_owned)
		.or_else(|| uri.authority().map(|authority| authority.to_string()))
		.unwrap_or_default();

	tracing::debug!(%host, secure, "derived callback origin from unvalidated host header");

	CallbackOrigin::new(secure, host)
}
