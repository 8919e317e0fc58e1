//! Setup/onboarding detection and the app-name guess shown on the setup page.

// self
use crate::{
	flows::{CallbackOrigin, Gate},
	http::TokenHttpClient,
	obs::{FlowKind, FlowOutcome, FlowSpan},
};

/// Result of visiting the setup route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
	/// Credentials are present; send the user back to the index route.
	Configured,
	/// Credentials are missing; render onboarding instructions.
	Page(SetupPage),
}

/// Values seeded into the setup page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupPage {
	/// App name guessed from the hosting-platform domain, if the host carried one.
	pub app_name: Option<String>,
	/// Callback URL the operator must register with the provider, when derivable.
	pub callback_url: Option<String>,
}

impl<C> Gate<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Decides between redirecting home and rendering the setup page.
	pub fn setup(&self, origin: &CallbackOrigin) -> SetupOutcome {
		let span = FlowSpan::begin(FlowKind::Setup, "setup");
		let _guard = span.entered();

		if self.is_configured() {
			span.record(FlowOutcome::Success);

			return SetupOutcome::Configured;
		}

		// The page still renders without a callback URL; the visit counts as failed.
		let callback_url = span.finish(origin.callback_url()).ok();

		SetupOutcome::Page(SetupPage {
			app_name: guess_app_name(&origin.host, &self.hosting_suffix),
			callback_url,
		})
	}
}

/// Strips an optional port and then the hosting `suffix` (ASCII case-insensitive) from `host`.
///
/// Returns `None` when the suffix is absent or nothing remains after stripping it.
pub fn guess_app_name(host: &str, suffix: &str) -> Option<String> {
	let host = strip_port(host.trim());

	if suffix.is_empty() || host.len() <= suffix.len() {
		return None;
	}

	let split = host.len() - suffix.len();
	let tail = host.get(split..)?;

	if !tail.eq_ignore_ascii_case(suffix) {
		return None;
	}

	host.get(..split).filter(|name| !name.is_empty()).map(str::to_owned)
}

fn strip_port(host: &str) -> &str {
	// Bracketed IPv6 literals keep their colons.
	if host.starts_with('[') {
		return host.find(']').and_then(|end| host.get(..=end)).unwrap_or(host);
	}

	match host.rsplit_once(':') {
		Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
		_ => host,
	}
}
