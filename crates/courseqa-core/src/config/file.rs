//! File-based configuration provider (YAML)
//!
//! Supports user-level (~/.config/courseqa/config.yaml) and workspace-level (.config/courseqa/config.yaml) config.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::settings::{Settings, SettingsOverlay};
use super::traits::{ConfigProvider, ConfigResult};

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    /// User-level config (~/.config/courseqa/config.yaml)
    User,
    /// Workspace-level config (.config/courseqa/config.yaml in workspace root)
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// File-based configuration provider
///
/// Reads and writes configuration from YAML files. A missing file reads as
/// an empty overlay, i.e. all defaults.
///
/// # Example
///
/// ```no_run
/// use courseqa_core::config::{FileConfigProvider, Settings};
///
/// let user = FileConfigProvider::user();
/// let workspace = FileConfigProvider::workspace("/path/to/workspace");
/// let settings = Settings::load_layered(&user, Some(&workspace)).unwrap();
/// ```
pub struct FileConfigProvider {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<SettingsOverlay>>,
}

impl FileConfigProvider {
    /// Create a new file config provider for a specific path
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// Create a user-level config provider (~/.config/courseqa/config.yaml)
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        let path = config_dir.join("courseqa").join("config.yaml");
        Self::new(path, ConfigLevel::User)
    }

    /// Create a workspace-level config provider (.config/courseqa/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("courseqa").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the config level
    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    /// Check if the config file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> ConfigResult<SettingsOverlay> {
        if !self.path.exists() {
            return Ok(SettingsOverlay::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SettingsOverlay::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    fn save(&self, overlay: &SettingsOverlay) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_yaml::to_string(overlay)?)?;
        *self.cache.write() = Some(overlay.clone());
        Ok(())
    }

    /// The file's contents, cached after the first read
    pub fn overlay(&self) -> ConfigResult<SettingsOverlay> {
        if let Some(overlay) = self.cache.read().as_ref() {
            return Ok(overlay.clone());
        }

        let overlay = self.load()?;
        *self.cache.write() = Some(overlay.clone());
        Ok(overlay)
    }

    /// Reload config from disk (invalidate cache)
    pub fn reload(&self) -> ConfigResult<SettingsOverlay> {
        let overlay = self.load()?;
        *self.cache.write() = Some(overlay.clone());
        Ok(overlay)
    }

    /// Create a backup of the current config file
    pub fn backup(&self) -> ConfigResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }
}

impl std::fmt::Debug for FileConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfigProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl ConfigProvider for FileConfigProvider {
    async fn get_settings(&self) -> ConfigResult<Settings> {
        Ok(Settings::default().overlay(&self.overlay()?))
    }

    async fn update_settings(&self, settings: Settings) -> ConfigResult<()> {
        self.save(&SettingsOverlay::from(&settings))
    }
}

impl Settings {
    /// Defaults, then the user file, then the workspace file
    pub fn load_layered(
        user: &FileConfigProvider,
        workspace: Option<&FileConfigProvider>,
    ) -> ConfigResult<Settings> {
        let mut settings = Settings::default().overlay(&user.overlay()?);
        if let Some(workspace) = workspace {
            settings = settings.overlay(&workspace.overlay()?);
        }
        Ok(settings)
    }
}
