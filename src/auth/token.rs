//! Token endpoint reply model and the JSON-shape classification applied to it.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::Secret,
	error::{AuthError, TransportError},
};

/// Access token plus the instance URL returned by a successful exchange.
///
/// Only the two recognized fields are kept; anything else the provider sends is ignored.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
	/// Access token secret; callers must avoid logging it.
	pub access_token: Secret,
	/// Instance (resource server) base URL for subsequent API calls.
	pub instance_url: String,
}
impl TokenResponse {
	/// Classifies a raw token endpoint body.
	///
	/// The HTTP status is never consulted for classification; it is only attached to parse
	/// failures. A body carrying an `error` field becomes [`AuthError`], a body that is not JSON
	/// (or lacks the recognized fields) becomes [`TransportError::MalformedResponse`].
	pub fn from_body(body: &[u8], status: Option<u16>) -> Result<Self> {
		let mut deserializer = serde_json::Deserializer::from_slice(body);
		let value: Value = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| TransportError::MalformedResponse { source, status })?;

		if let Some(error) = value.get("error") {
			return Err(provider_error(error, value.get("error_description")).into());
		}

		serde_path_to_error::deserialize(value)
			.map_err(|source| TransportError::MalformedResponse { source, status }.into())
	}
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token", &self.access_token)
			.field("instance_url", &self.instance_url)
			.finish()
	}
}

fn provider_error(error: &Value, description: Option<&Value>) -> AuthError {
	let message = match error {
		Value::String(message) => message.clone(),
		other => other.to_string(),
	};
	let err = AuthError::new(message);

	match description.and_then(Value::as_str) {
		Some(description) => err.with_description(description),
		None => err,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn extracts_recognized_fields_and_ignores_extras() {
		let body = br#"{"access_token":"abc","instance_url":"https://inst.example.com","id":"x","token_type":"Bearer"}"#;
		let response =
			TokenResponse::from_body(body, Some(200)).expect("Token body should parse.");

		assert_eq!(response.access_token.expose(), "abc");
		assert_eq!(response.instance_url, "https://inst.example.com");
	}

	#[test]
	fn error_field_wins_regardless_of_status() {
		let body = br#"{"error":"invalid_grant","error_description":"authentication failure"}"#;
		let err = TokenResponse::from_body(body, Some(200))
			.expect_err("Error bodies should fail even with a 200 status.");
		let auth = match err {
			Error::Provider(auth) => auth,
			other => panic!("Expected a provider error, got {other:?}."),
		};

		assert_eq!(auth.message, "invalid_grant");
		assert_eq!(auth.description.as_deref(), Some("authentication failure"));
	}

	#[test]
	fn non_string_error_is_rendered_as_json() {
		let err = TokenResponse::from_body(br#"{"error":42}"#, None)
			.expect_err("Numeric error fields should still classify as provider errors.");

		assert!(matches!(err, Error::Provider(AuthError { ref message, .. }) if message == "42"));
	}

	#[test]
	fn unreadable_bodies_are_transport_failures() {
		let err = TokenResponse::from_body(b"<html>bad gateway</html>", Some(502))
			.expect_err("HTML bodies should not parse.");

		assert!(matches!(
			err,
			Error::Transport(TransportError::MalformedResponse { status: Some(502), .. })
		));

		let err = TokenResponse::from_body(br#"{"instance_url":"https://inst.example.com"}"#, None)
			.expect_err("Missing access tokens should not parse.");

		assert!(matches!(err, Error::Transport(TransportError::MalformedResponse { .. })));
	}

	#[test]
	fn debug_output_redacts_access_token() {
		let response = TokenResponse {
			access_token: Secret::new("abc"),
			instance_url: "https://inst.example.com".into(),
		};

		assert!(!format!("{response:?}").contains("abc"));
	}
}
