//! Boots the gate behind an axum server, reading credentials from the process environment.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use force_oauth_gate::{
	config::{ConfigSource, EnvSource, Settings},
	flows::Gate,
	web,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let settings = Settings::load();

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config: Arc<dyn ConfigSource> = Arc::new(EnvSource);
	let gate = Gate::new(settings.endpoints()?, config, settings.token_timeout())?
		.with_hosting_suffix(settings.hosting_suffix.clone());

	if !gate.is_configured() {
		tracing::warn!("client credentials are not configured yet, the setup page will be served");
	}

	web::serve(&settings, gate).await?;

	Ok(())
}
