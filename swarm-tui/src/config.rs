use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use swarm_types::ColorScheme;

const CONFIG_DIR_NAME: &str = ".social-swarm";
const PREFERENCES_FILE: &str = "preferences.json";

/// User preferences stored locally
///
/// Only presentation settings live here. Groups and the current
/// search/sort state are never written to disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

/// Manages the `~/.social-swarm` configuration directory
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Config manager rooted in the user's home directory
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Could not determine home directory")?;
        Ok(Self::with_dir(home_dir.join(CONFIG_DIR_NAME)))
    }

    /// Config manager rooted at an explicit directory
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn preferences_file(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE)
    }

    pub fn save_preferences(&self, prefs: &Preferences) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).with_context(|| {
                format!("Failed to create {}", self.config_dir.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;
        fs::write(self.preferences_file(), json).context("Failed to write preferences file")?;

        Ok(())
    }

    /// Load preferences, falling back to defaults when none were saved
    pub fn load_preferences(&self) -> Result<Preferences> {
        let prefs_file = self.preferences_file();

        if !prefs_file.exists() {
            return Ok(Preferences::default());
        }

        let json = fs::read_to_string(&prefs_file).context("Failed to read preferences file")?;
        let prefs: Preferences =
            serde_json::from_str(&json).context("Failed to parse preferences")?;

        Ok(prefs)
    }
}
