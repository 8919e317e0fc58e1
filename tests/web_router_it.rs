#![cfg(all(feature = "reqwest", feature = "server"))]

// crates.io
use axum::{
	body::{self, Body},
	http::{Request, Response, StatusCode, header::LOCATION},
};
use httpmock::prelude::*;
use tower::ServiceExt;
// self
use force_oauth_gate::{
	_preludet::*,
	config::{CLIENT_SECRET_KEY, MapSource},
	web,
};

const TOKEN_PATH: &str = "/services/oauth2/token";

async fn get(gate: ReqwestTestGate, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
	let mut request = Request::builder().uri(uri);

	for (name, value) in headers {
		request = request.header(*name, *value);
	}

	web::router(gate)
		.oneshot(request.body(Body::empty()).expect("Request fixture should build."))
		.await
		.expect("Router should always produce a response.")
}

fn location(response: &Response<Body>) -> &str {
	response
		.headers()
		.get(LOCATION)
		.and_then(|value| value.to_str().ok())
		.expect("Redirects should carry a Location header.")
}

fn query(location: &str) -> BTreeMap<String, String> {
	Url::parse(location)
		.expect("Authorize redirect should be absolute.")
		.query_pairs()
		.into_owned()
		.collect()
}

async fn text(response: Response<Body>) -> String {
	let bytes = body::to_bytes(response.into_body(), usize::MAX)
		.await
		.expect("Response body should be readable.");

	String::from_utf8(bytes.to_vec()).expect("Response body should be UTF-8.")
}

#[tokio::test]
async fn secure_request_redirects_to_authorize_with_https_callback() {
	let server = MockServer::start_async().await;
	let gate = build_reqwest_test_gate(&server.base_url(), configured_source());
	let response =
		get(gate, "/", &[("host", "example.com"), ("x-forwarded-proto", "https")]).await;

	assert_eq!(response.status(), StatusCode::SEE_OTHER);

	let location = location(&response);
	let pairs = query(location);

	assert!(location.starts_with(&format!("{}/services/oauth2/authorize?", server.base_url())));
	assert_eq!(pairs.get("response_type").map(String::as_str), Some("code"));
	assert_eq!(pairs.get("client_id").map(String::as_str), Some(TEST_CLIENT_ID));
	assert_eq!(pairs.get("redirect_uri").map(String::as_str), Some("https://example.com"));
}

#[tokio::test]
async fn insecure_request_uses_http_callback() {
	let server = MockServer::start_async().await;
	let gate = build_reqwest_test_gate(&server.base_url(), configured_source());
	let response = get(gate, "/", &[("host", "example.com")]).await;

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(
		query(location(&response)).get("redirect_uri").map(String::as_str),
		Some("http://example.com")
	);
}

#[tokio::test]
async fn unconfigured_index_always_redirects_to_setup() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200)
				.body(r#"{"access_token":"abc","instance_url":"https://inst.example.com"}"#);
		})
		.await;
	let source = Arc::new(MapSource::default().with("consumer.key", TEST_CLIENT_ID));

	for uri in ["/", "/?code=abc"] {
		let gate = build_reqwest_test_gate(&server.base_url(), source.clone());
		let response = get(gate, uri, &[("host", "example.com")]).await;

		assert_eq!(response.status(), StatusCode::SEE_OTHER, "uri={uri}");
		assert_eq!(location(&response), web::SETUP_PATH, "uri={uri}");
	}

	token_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn code_is_exchanged_with_derived_redirect_uri() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(TOKEN_PATH)
				.header("content-type", "application/x-www-form-urlencoded")
				.form_urlencoded_tuple("grant_type", "authorization_code")
				.form_urlencoded_tuple("code", "aPrx.code==")
				.form_urlencoded_tuple("client_id", TEST_CLIENT_ID)
				.form_urlencoded_tuple("client_secret", TEST_CLIENT_SECRET)
				.form_urlencoded_tuple("redirect_uri", "https://example.com");
			then.status(200).header("content-type", "application/json").body(
				r#"{"access_token":"abc","instance_url":"https://inst.example.com","scope":"api"}"#,
			);
		})
		.await;
	let gate = build_reqwest_test_gate(&server.base_url(), configured_source());
	let response = get(
		gate,
		"/?code=aPrx.code%3D%3D",
		&[("host", "example.com"), ("x-forwarded-proto", "https")],
	)
	.await;

	token_mock.assert_async().await;

	assert_eq!(response.status(), StatusCode::OK);

	let html = text(response).await;

	assert!(html.contains("https://inst.example.com"));
	assert!(!html.contains("\"abc\""));
}

#[tokio::test]
async fn provider_error_renders_failure_page() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(400).body(r#"{"error":"invalid_grant"}"#);
		})
		.await;

	let gate = build_reqwest_test_gate(&server.base_url(), configured_source());
	let response = get(gate, "/?code=used", &[("host", "example.com")]).await;

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert!(!text(response).await.contains("invalid_grant"));
}

#[tokio::test]
async fn unreachable_provider_renders_gateway_error() {
	let gate = build_reqwest_test_gate("http://127.0.0.1:9", configured_source());
	let response = get(gate, "/?code=abc", &[("host", "example.com")]).await;

	assert!(
		matches!(response.status(), StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT),
		"status={}",
		response.status()
	);
}

#[tokio::test]
async fn bad_host_header_is_rejected() {
	let gate = build_reqwest_test_gate("http://127.0.0.1:9", configured_source());
	let response = get(gate, "/", &[("host", "user@example.com")]).await;

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn setup_page_guesses_app_name_until_configured() {
	let source = Arc::new(MapSource::default());
	let gate = build_reqwest_test_gate("http://127.0.0.1:9", source.clone());
	let response = get(gate.clone(), "/setup", &[("host", "my-app.herokuapp.com")]).await;

	assert_eq!(response.status(), StatusCode::OK);

	let html = text(response).await;

	assert!(html.contains("value=\"my-app\""));
	assert!(html.contains("http://my-app.herokuapp.com"));

	let response = get(gate.clone(), "/setup", &[("host", "example.com")]).await;

	assert_eq!(response.status(), StatusCode::OK);
	assert!(text(response).await.contains("value=\"\""));

	source.set("consumer.key", TEST_CLIENT_ID);
	source.set(CLIENT_SECRET_KEY, TEST_CLIENT_SECRET);

	let response = get(gate, "/setup", &[("host", "example.com")]).await;

	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(&response), web::INDEX_PATH);
}
