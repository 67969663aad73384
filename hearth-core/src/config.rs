use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Centralized configuration for the hearth welcome screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HearthConfig {
    pub paths: PathsConfig,
    pub launcher: Option<LauncherConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Bundled welcome project; its row never shows a remove control
    pub welcome_project: PathBuf,
    /// Sample project opened by the "explore" trigger
    pub explore_project: PathBuf,
    /// Root under which locally created projects live
    pub local_projects_root: PathBuf,
    /// Root under which mounted/external storage appears
    pub mount_root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    pub recents_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for HearthConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            paths: PathsConfig {
                welcome_project: home.join(".hearth/welcome"),
                explore_project: home.join(".hearth/sample"),
                local_projects_root: home.join("projects"),
                mount_root: PathBuf::from("/mnt"),
            },
            launcher: None,
        }
    }
}

impl HearthConfig {
    /// Load config from ~/.hearth/config.toml
    ///
    /// Fails hard with actionable error if config doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            anyhow::bail!(
                "Config not found at {:?}\n\nCreate it, or start hearth without one to use defaults",
                config_path
            );
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        let mut config: Self =
            toml::from_str(&content).context("Failed to parse config file (invalid TOML)")?;

        // Expand variables (${var} substitution)
        config.expand_variables();

        Ok(config)
    }

    /// Load the user config, falling back to defaults when none exists.
    /// A present-but-invalid config is still an error.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Get config file path: ~/.hearth/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hearth/config.toml")
    }

    /// Ordered label-shortening prefixes: the local projects root first
    /// (most specific for this setup), then the mount root. Each prefix
    /// carries a trailing separator so stripping yields a relative label.
    pub fn known_prefixes(&self) -> Vec<String> {
        [
            &self.paths.local_projects_root,
            &self.paths.mount_root,
        ]
        .iter()
        .map(|p| with_trailing_separator(&p.display().to_string()))
        .collect()
    }

    /// Expand ${var} references in paths
    fn expand_variables(&mut self) {
        let mut vars = HashMap::new();
        vars.insert("HOME".to_string(), env::var("HOME").unwrap_or_default());

        self.paths.welcome_project = Self::expand_path(&self.paths.welcome_project, &vars);
        self.paths.explore_project = Self::expand_path(&self.paths.explore_project, &vars);
        self.paths.local_projects_root = Self::expand_path(&self.paths.local_projects_root, &vars);
        self.paths.mount_root = Self::expand_path(&self.paths.mount_root, &vars);

        if let Some(ref mut launcher) = self.launcher {
            if let Some(ref recents) = launcher.recents_file {
                launcher.recents_file = Some(Self::expand_path(recents, &vars));
            }
        }
    }

    /// Expand ${var} references in a path
    fn expand_path(path: &Path, vars: &HashMap<String, String>) -> PathBuf {
        let path_str = path.display().to_string();
        PathBuf::from(Self::expand_string(&path_str, vars))
    }

    /// Expand ${var} references in a string
    fn expand_string(s: &str, vars: &HashMap<String, String>) -> String {
        let mut result = s.to_string();

        for (key, value) in vars {
            let pattern = format!("${{{}}}", key);
            result = result.replace(&pattern, value);
        }

        result
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml_str)
            .context(format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}

fn with_trailing_separator(root: &str) -> String {
    let mut s = root.to_string();
    if !s.ends_with('/') {
        s.push('/');
    }
    s
}
