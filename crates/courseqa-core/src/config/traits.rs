//! Configuration provider trait

use async_trait::async_trait;

use super::settings::Settings;

/// Configuration provider abstraction
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory for testing
/// - `FileConfigProvider`: YAML file (~/.config/courseqa/config.yaml)
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Effective settings from this source (defaults fill the gaps)
    async fn get_settings(&self) -> ConfigResult<Settings>;

    /// Replace the stored settings
    async fn update_settings(&self, settings: Settings) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
