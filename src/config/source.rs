// std
use std::env;
// self
use crate::_prelude::*;

/// Read-only key/value configuration consulted at request time.
///
/// Lookups are two-valued: a key either resolves to a value or it does not. Implementations
/// must be cheap enough to call on every request and must not cache across calls unless the
/// cached value is refreshed externally.
pub trait ConfigSource
where
	Self: 'static + Send + Sync,
{
	/// Returns the value for `key`, or `None` when the key is absent.
	fn lookup(&self, key: &str) -> Option<String>;
}

/// Resolves dotted keys against the process environment (`consumer.key` → `CONSUMER_KEY`).
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvSource;
impl EnvSource {
	/// Maps a dotted configuration key onto its environment variable name.
	pub fn env_var_name(key: &str) -> String {
		key.chars()
			.map(|c| if c == '.' || c == '-' { '_' } else { c.to_ascii_uppercase() })
			.collect()
	}
}
impl ConfigSource for EnvSource {
	fn lookup(&self, key: &str) -> Option<String> {
		env::var(Self::env_var_name(key)).ok()
	}
}

/// In-memory source whose entries can be changed while the gate is running.
#[derive(Debug, Default)]
pub struct MapSource(RwLock<BTreeMap<String, String>>);
impl MapSource {
	/// Seeds an entry, consuming and returning the source for chaining.
	pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key, value);

		self
	}

	/// Inserts or replaces an entry.
	pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
		self.0.write().insert(key.into(), value.into());
	}

	/// Removes an entry, returning the previous value.
	pub fn remove(&self, key: &str) -> Option<String> {
		self.0.write().remove(key)
	}
}
impl ConfigSource for MapSource {
	fn lookup(&self, key: &str) -> Option<String> {
		self.0.read().get(key).cloned()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn env_names_follow_dotted_keys() {
		assert_eq!(EnvSource::env_var_name("consumer.key"), "CONSUMER_KEY");
		assert_eq!(EnvSource::env_var_name("consumer.secret"), "CONSUMER_SECRET");
		assert_eq!(EnvSource::env_var_name("token-timeout"), "TOKEN_TIMEOUT");
	}

	#[test]
	fn map_source_reflects_runtime_changes() {
		let source = MapSource::default().with("consumer.key", "id");

		assert_eq!(source.lookup("consumer.key").as_deref(), Some("id"));

		source.remove("consumer.key");

		assert_eq!(source.lookup("consumer.key"), None);
	}
}
