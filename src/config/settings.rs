//! Configuration file support for k8s-release-dev

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub publish: PublishSettings,
}

/// Default values for publish invocations
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PublishSettings {
    /// Path to the import-and-push script
    #[serde(default = "default_script")]
    pub script: String,

    /// Platforms built into the multi-architecture manifest
    #[serde(default = "default_platforms")]
    pub platforms: String,

    /// Registry repository the manifest is pushed to, if configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
}

// Default value functions
fn default_script() -> String {
    "./import_push_with_manifest.sh".to_string()
}

fn default_platforms() -> String {
    "linux/amd64,linux/arm64".to_string()
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            script: default_script(),
            platforms: default_platforms(),
            registry: None,
        }
    }
}

impl Settings {
    /// Load settings from file or return defaults
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_file() {
            match Self::load_from_file(&path) {
                Ok(settings) => settings,
                Err(err) => {
                    crate::log_warn!("Ignoring config file {}: {:#}", path.display(), err);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Find config file in standard locations
    /// Priority:
    /// 1. .k8s-release-dev.toml in current directory
    /// 2. ~/.config/k8s-release-dev/config.toml (XDG config directory)
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory
        let local_config = PathBuf::from(".k8s-release-dev.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("k8s-release-dev").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Save settings to file
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate example config file content
    pub fn example_config() -> String {
        let example = Settings::default();
        let header = "# k8s-release-dev configuration file\n\
                      # Place this file at ~/.config/k8s-release-dev/config.toml or .k8s-release-dev.toml in your project\n\n";

        match toml::to_string_pretty(&example) {
            Ok(config) => format!("{}{}", header, config),
            Err(_) => {
                // Fallback in case serialization fails
                r#"# k8s-release-dev configuration file
# Place this file at ~/.config/k8s-release-dev/config.toml or .k8s-release-dev.toml in your project

[publish]
script = "./import_push_with_manifest.sh"
platforms = "linux/amd64,linux/arm64"
# registry = "my.registry/kubernetes"  # Optional: default registry for publish
"#
                .to_string()
            }
        }
    }
}
