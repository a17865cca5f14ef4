use std::collections::HashMap;

/// Key-value lookup for configuration values.
/// Implemented by the process environment, and by plain maps so tests can
/// supply synthetic configurations without touching the real environment.
pub trait ConfigSource {
    /// Look up a configuration value by key. Unset keys return `None`.
    fn get(&self, key: &str) -> Option<String>;
}

/// Configuration source backed by the process environment.
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
