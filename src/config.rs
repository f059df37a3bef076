//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/storectl/storectl.toml`
//! 3. Explicit config file: `--config <FILE>`
//! 4. Environment variables: `STORECTL_*` prefix
//! 5. `--base-url` command line flag (applied by the caller)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_DESCRIPTION: &str = "descripción del producto";
pub const DEFAULT_IMAGE: &str = "https://imagenPrueba.com.ar";

/// Values sent for product fields the command line does not supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderConfig {
    pub description: String,
    pub image: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.into(),
            image: DEFAULT_IMAGE.into(),
        }
    }
}

/// Raw placeholder config for intermediate parsing (`None` = not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPlaceholderConfig {
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_url: Option<String>,
    pub placeholder: RawPlaceholderConfig,
    pub headers: Option<BTreeMap<String, String>>,
}

/// Unified configuration for storectl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Catalog API base URL
    pub base_url: String,
    /// Placeholder fields for created products
    pub placeholder: PlaceholderConfig,
    /// Extra headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            placeholder: PlaceholderConfig::default(),
            headers: BTreeMap::new(),
        }
    }
}

/// Get the XDG config directory for storectl.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "storectl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("storectl.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base).
    ///
    /// - Scalars: overlay wins if specified
    /// - Headers: union, overlay wins on the same name
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut headers = self.headers.clone();
        if let Some(extra) = &overlay.headers {
            headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Self {
            base_url: overlay
                .base_url
                .clone()
                .unwrap_or_else(|| self.base_url.clone()),
            placeholder: PlaceholderConfig {
                description: overlay
                    .placeholder
                    .description
                    .clone()
                    .unwrap_or_else(|| self.placeholder.description.clone()),
                image: overlay
                    .placeholder
                    .image
                    .clone()
                    .unwrap_or_else(|| self.placeholder.image.clone()),
            },
            headers,
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply STORECTL_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("STORECTL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("base_url") {
            settings.base_url = val;
        }
        if let Ok(val) = config.get_string("placeholder.description") {
            settings.placeholder.description = val;
        }
        if let Ok(val) = config.get_string("placeholder.image") {
            settings.placeholder.image = val;
        }

        Ok(settings)
    }

    /// Override the base URL (command line flag).
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        self
    }

    /// Headers as (name, value) pairs in name order.
    pub fn header_list(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
