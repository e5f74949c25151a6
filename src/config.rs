use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::registry::{AppDescriptor, AppRegistry, builtin_descriptors};

/// On‑disk TOML form of the registry (`[[apps]]` tables).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub apps: Vec<AppDescriptor>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            apps: builtin_descriptors(),
        }
    }
}

/// `<config dir>/app-registry/apps.toml`
pub fn default_config_path() -> Result<PathBuf> {
    config_path_in(dirs::config_dir())
}

fn config_path_in(config_dir: Option<PathBuf>) -> Result<PathBuf> {
    let config_dir = config_dir
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("app-registry");
    Ok(config_dir.join("apps.toml"))
}

impl RegistryConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let cfg_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let cfg: RegistryConfig = toml::from_str(&cfg_str)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        log::info!("Using config from: {}", path.display());
        Ok(cfg)
    }

    /// Load `path`, writing the default config there first if it doesn't exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!(
                "Config not found at {}, creating default configuration",
                path.display()
            );

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }

            let default_toml = toml::to_string_pretty(&RegistryConfig::default())
                .context("Failed to serialize default config")?;
            fs::write(path, default_toml).context("Failed to write config file")?;

            log::info!("Created default configuration at {}", path.display());
        }

        Self::load(path)
    }

    /// Validate into an [`AppRegistry`], warning about repeated names.
    pub fn into_registry(self) -> Result<AppRegistry> {
        let registry = AppRegistry::new(self.apps).context("Invalid app registry")?;
        for name in registry.duplicate_names() {
            log::warn!("App '{name}' is registered more than once; lookups use the first entry");
        }
        Ok(registry)
    }
}
