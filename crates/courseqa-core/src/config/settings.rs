//! Application settings

use serde::{Deserialize, Serialize};

use crate::generator::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::providers::ProviderModelConfig;
use crate::session::DEFAULT_MAX_HISTORY;
use crate::store::DEFAULT_MAX_RESULTS;

pub const DEFAULT_PROVIDER: &str = "anthropic";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Effective settings for a course assistant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Provider id (`anthropic`, `openai`, `ollama`, `mock`, ...)
    pub provider: String,
    pub model: String,
    /// Custom API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Per-request timeout; none means the transport's own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Hits per search
    pub max_results: usize,
    /// Exchanges remembered per session
    pub max_history: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            request_timeout_secs: None,
            max_results: DEFAULT_MAX_RESULTS,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl Settings {
    /// Apply every field the overlay sets
    pub fn overlay(mut self, overlay: &SettingsOverlay) -> Self {
        if let Some(v) = &overlay.provider {
            self.provider = v.clone();
        }
        if let Some(v) = &overlay.model {
            self.model = v.clone();
        }
        if let Some(v) = &overlay.api_base {
            self.api_base = Some(v.clone());
        }
        if let Some(v) = overlay.temperature {
            self.temperature = v;
        }
        if let Some(v) = overlay.max_tokens {
            self.max_tokens = v;
        }
        if let Some(v) = overlay.request_timeout_secs {
            self.request_timeout_secs = Some(v);
        }
        if let Some(v) = overlay.max_results {
            self.max_results = v;
        }
        if let Some(v) = overlay.max_history {
            self.max_history = v;
        }
        self
    }

    /// Model settings for provider calls
    pub fn model_config(&self) -> ProviderModelConfig {
        let config = ProviderModelConfig::new(&self.model);
        match &self.api_base {
            Some(base) => config.with_api_base(base),
            None => config,
        }
    }
}

impl From<&Settings> for SettingsOverlay {
    fn from(s: &Settings) -> Self {
        Self {
            provider: Some(s.provider.clone()),
            model: Some(s.model.clone()),
            api_base: s.api_base.clone(),
            temperature: Some(s.temperature),
            max_tokens: Some(s.max_tokens),
            request_timeout_secs: s.request_timeout_secs,
            max_results: Some(s.max_results),
            max_history: Some(s.max_history),
        }
    }
}

/// Settings as stored in a config file; unset fields fall through
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_history: Option<usize>,
}
