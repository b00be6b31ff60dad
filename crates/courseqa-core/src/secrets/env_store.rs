//! Environment variable secret store

use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Mapping from provider names to environment variable names
static ENV_VAR_MAP: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("anthropic", vec!["ANTHROPIC_API_KEY"]);
    m.insert("openai", vec!["OPENAI_API_KEY"]);
    m.insert("gemini", vec!["GEMINI_API_KEY", "GOOGLE_API_KEY"]);
    m.insert("google", vec!["GEMINI_API_KEY", "GOOGLE_API_KEY"]);
    m.insert("ollama", vec![]); // Ollama doesn't need an API key
    m
});

/// Read-only secret store backed by environment variables
///
/// Provider names map to their conventional variables
/// (`anthropic` → `ANTHROPIC_API_KEY`); any other key is tried as-is and
/// then as `<KEY>_API_KEY`. Empty values count as unset.
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Get the environment variable names for a provider
    pub fn env_vars_for_provider(provider: &str) -> Option<&'static [&'static str]> {
        ENV_VAR_MAP.get(provider.to_lowercase().as_str()).map(|v| v.as_slice())
    }

    fn read(var: &str) -> Option<String> {
        env::var(var).ok().filter(|v| !v.is_empty())
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = Self::read(key) {
            return Some(value);
        }

        if let Some(vars) = Self::env_vars_for_provider(key) {
            if let Some(value) = vars.iter().find_map(|v| Self::read(v)) {
                return Some(value);
            }
        }

        Self::read(&format!("{}_API_KEY", key.to_uppercase()))
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }

    fn delete(&self, _key: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_mapping() {
        assert_eq!(
            EnvSecretStore::env_vars_for_provider("Anthropic"),
            Some(&["ANTHROPIC_API_KEY"][..])
        );
        assert_eq!(EnvSecretStore::env_vars_for_provider("ollama"), Some(&[][..]));
        assert!(EnvSecretStore::env_vars_for_provider("unknown").is_none());
    }

    #[test]
    fn test_suffix_lookup() {
        env::set_var("COURSEQA_TEST_PROVIDER_API_KEY", "sk-suffix");
        let store = EnvSecretStore::new();
        assert_eq!(
            store.get("courseqa_test_provider"),
            Some("sk-suffix".to_string())
        );
        env::remove_var("COURSEQA_TEST_PROVIDER_API_KEY");
    }

    #[test]
    fn test_empty_value_is_unset() {
        env::set_var("COURSEQA_TEST_EMPTY", "");
        let store = EnvSecretStore::new();
        assert!(!store.has("COURSEQA_TEST_EMPTY"));
        env::remove_var("COURSEQA_TEST_EMPTY");
    }

    #[test]
    fn test_read_only() {
        let store = EnvSecretStore::new();
        assert!(matches!(store.store("k", "v"), Err(SecretStoreError::ReadOnly)));
        assert!(matches!(store.delete("k"), Err(SecretStoreError::ReadOnly)));
    }
}
