//! Configuration provider abstractions
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigProvider`: In-memory for testing
//! - `FileConfigProvider`: YAML file-based (user/workspace level)

mod file;
mod memory;
mod settings;
mod traits;

pub use file::{ConfigLevel, FileConfigProvider};
pub use memory::MemoryConfigProvider;
pub use settings::{Settings, SettingsOverlay, DEFAULT_MODEL, DEFAULT_PROVIDER};
pub use traits::{ConfigError, ConfigProvider, ConfigResult};
