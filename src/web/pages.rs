//! Minimal server-rendered HTML pages.

// crates.io
use axum::http::StatusCode;
// self
use crate::{
	auth::TokenResponse,
	config::{CLIENT_ID_KEY, CLIENT_SECRET_KEY, EnvSource},
	flows::SetupPage,
};

/// Onboarding page shown until both credentials are configured.
pub fn setup(page: &SetupPage) -> String {
	let app_name = page.app_name.as_deref().map(escape).unwrap_or_default();
	let callback = match page.callback_url.as_deref() {
		Some(url) => format!("<p>Register this callback URL with your connected app: <code>{}</code></p>", escape(url)),
		None => String::new(),
	};

	layout(
		"Setup",
		&format!(
			"<h1>Finish setting up your app</h1>\
			<label>App name <input name=\"app-name\" value=\"{app_name}\"></label>\
			{callback}\
			<p>Then set <code>{id}</code> to the consumer key and <code>{secret}</code> to the consumer secret, and reload this page.</p>",
			id = EnvSource::env_var_name(CLIENT_ID_KEY),
			secret = EnvSource::env_var_name(CLIENT_SECRET_KEY),
		),
	)
}

/// Landing page rendered after a successful exchange. The access token is not echoed.
pub fn landing(token: &TokenResponse) -> String {
	let instance = escape(&token.instance_url);

	layout(
		"Authenticated",
		&format!(
			"<h1>You are signed in</h1><p>Instance: <a href=\"{instance}\">{instance}</a></p>"
		),
	)
}

/// Generic failure page; details are logged, never rendered.
pub fn failure(status: StatusCode, summary: &str) -> String {
	let title = status.canonical_reason().unwrap_or("Error");

	layout(title, &format!("<h1>{}</h1><p>{}</p>", escape(title), escape(summary)))
}

fn layout(title: &str, body: &str) -> String {
	format!(
		"<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{body}</body></html>",
		escape(title)
	)
}

fn escape(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for c in raw.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}

	out
}
