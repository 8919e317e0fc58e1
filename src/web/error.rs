// crates.io
use axum::{
	http::StatusCode,
	response::{Html, IntoResponse, Response},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	web::pages,
};

impl Error {
	/// HTTP status used when this error reaches the web layer.
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::Config(ConfigError::InvalidCallbackHost { .. }) => StatusCode::BAD_REQUEST,
			Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
			Error::Provider(_) => StatusCode::UNAUTHORIZED,
			Error::Transport(TransportError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
			Error::Transport(_) => StatusCode::BAD_GATEWAY,
		}
	}
}
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let status = self.status_code();

		match &self {
			Error::Provider(e) => tracing::warn!(
				error = %e.message,
				description = e.description.as_deref().unwrap_or_default(),
				"provider rejected the authorization code"
			),
			Error::Transport(e) => tracing::error!(error = %e, "token exchange failed in transit"),
			Error::Config(e) => tracing::error!(error = %e, "request could not be served"),
		}

		(status, Html(pages::failure(status, summary(&self)))).into_response()
	}
}

// Provider and transport details stay in the logs.
fn summary(error: &Error) -> &'static str {
	match error {
		Error::Config(ConfigError::InvalidCallbackHost { .. }) =>
			"The request host cannot be used as an OAuth callback.",
		Error::Config(_) => "The application is not configured correctly.",
		Error::Provider(_) => "The identity provider rejected the sign-in attempt. Please try again.",
		Error::Transport(_) => "The identity provider could not be reached. Please try again later.",
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::AuthError;

	#[test]
	fn statuses_follow_error_taxonomy() {
		assert_eq!(Error::from(AuthError::new("invalid_grant")).status_code(), StatusCode::UNAUTHORIZED);
		assert_eq!(Error::from(TransportError::Timeout).status_code(), StatusCode::GATEWAY_TIMEOUT);
		assert_eq!(
			Error::from(ConfigError::InvalidCallbackHost { host: String::new() }).status_code(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(
			Error::from(ConfigError::MissingCredential { key: "consumer.key" }).status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}

	#[test]
	fn provider_errors_render_unauthorized() {
		let response = Error::from(AuthError::new("secret-detail")).into_response();

		assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	}
}
