//! User settings: where the wardrobe and saved cards live, and who the
//! active user is. Stored as `config.toml` in the StyleBoard config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};

/// File locations for the wardrobe and saved style cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Wardrobe JSON file
    #[serde(default = "default_wardrobe_path")]
    pub wardrobe: PathBuf,
    /// Saved style cards JSON file
    #[serde(default = "default_saved_boards_path")]
    pub saved_boards: PathBuf,
}

fn default_wardrobe_path() -> PathBuf {
    Config::config_dir().map_or_else(|_| PathBuf::from("wardrobe.json"), |dir| dir.join("wardrobe.json"))
}

fn default_saved_boards_path() -> PathBuf {
    Config::config_dir().map_or_else(
        |_| PathBuf::from("saved_boards.json"),
        |dir| dir.join("saved_boards.json"),
    )
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            wardrobe: default_wardrobe_path(),
            saved_boards: default_saved_boards_path(),
        }
    }
}

/// The active user.
///
/// Stands in for the signed-in session of the app: every wardrobe read and
/// card save is scoped to this user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// User ID owning the wardrobe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/StyleBoard/config.toml`
/// - macOS: `~/Library/Application Support/StyleBoard/config.toml`
/// - Windows: `%APPDATA%\StyleBoard\config.toml`
///
/// The directory can be overridden with `STYLEBOARD_CONFIG_DIR`.
///
/// # Validation
///
/// - `user_id`, when set, must be non-empty and contain no whitespace
/// - wardrobe and saved board paths must not point at directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Active user
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl Config {
    /// Default settings: data files next to the config file, no user.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once `config set` has written a config file.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path().is_ok_and(|path| path.is_file())
    }

    /// Directory holding `config.toml` and the default data files.
    ///
    /// `STYLEBOARD_CONFIG_DIR` wins when set; otherwise this is `StyleBoard`
    /// under the platform config directory (`~/.config` on Linux,
    /// `~/Library/Application Support` on macOS, `%APPDATA%` on Windows).
    pub fn config_dir() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => dirs::config_dir()
                .map(|base| base.join(CONFIG_DIR_NAME))
                .context("No platform config directory; set STYLEBOARD_CONFIG_DIR"),
        }
    }

    /// `config.toml` inside [`Config::config_dir`].
    pub fn config_file_path() -> Result<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads the user's settings, or defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads and validates settings from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read settings from {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Malformed settings in {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Writes the settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Validates, then writes `path` via a sibling `.toml.tmp` and a rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create {}", dir.display()))?;
        }

        let staged = path.with_extension("toml.tmp");
        let body = toml::to_string_pretty(self).context("Cannot encode settings as TOML")?;
        fs::write(&staged, body)
            .with_context(|| format!("Cannot write {}", staged.display()))?;
        fs::rename(&staged, path)
            .with_context(|| format!("Cannot move settings into {}", path.display()))?;

        Ok(())
    }

    /// Checks the user ID and data file paths.
    pub fn validate(&self) -> Result<()> {
        if let Some(user_id) = &self.profile.user_id {
            if user_id.is_empty() || user_id.chars().any(char::is_whitespace) {
                anyhow::bail!("User ID '{user_id}' must be non-empty and contain no whitespace");
            }
        }

        for (label, path) in [
            ("Wardrobe", &self.paths.wardrobe),
            ("Saved boards", &self.paths.saved_boards),
        ] {
            if path.is_dir() {
                anyhow::bail!("{label} path is a directory: {}", path.display());
            }
        }

        Ok(())
    }

    /// Sets the active user with validation.
    pub fn set_user_id(&mut self, user_id: impl Into<String>) -> Result<()> {
        self.profile.user_id = Some(user_id.into());
        self.validate()
    }
}
