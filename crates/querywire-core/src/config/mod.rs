//! # Querywire Kernel Configuration
//!
//! [`KernelConfig`] is read once before the container is built. Besides the
//! kernel settings and the per-driver switches, it holds a declarative
//! service table: every entry becomes a definition, with its tags, after
//! the bundles have registered theirs.
//!
//! JSON is always supported; YAML and TOML sit behind the `yaml-config`
//! and `toml-config` features (both on by default).
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::kernel::constants;
use crate::container::{Argument, ContainerBuilder, Definition, Result as ContainerResult, TagAttributes};

pub mod error;

pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// On/off switch for one data driver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    #[serde(default)]
    pub enabled: bool,
}

/// One tag instance in the service table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// One service in the declarative service table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub id: String,
    pub class: String,
    #[serde(default)]
    pub arguments: BTreeMap<String, Argument>,
    #[serde(default)]
    pub tags: Vec<TagConfig>,
}

impl ServiceConfig {
    pub fn to_definition(&self) -> Definition {
        let mut definition = Definition::new(self.class.clone());
        for (name, value) in &self.arguments {
            definition.replace_argument(name.clone(), value.clone());
        }
        for tag in &self.tags {
            let attributes = TagAttributes {
                priority: tag.priority,
                ..TagAttributes::default()
            };
            definition.add_tag(tag.name.clone(), attributes);
        }
        definition
    }
}

fn default_environment() -> String {
    constants::DEFAULT_ENVIRONMENT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub orm: DriverConfig,
    #[serde(default)]
    pub document: DriverConfig,
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            debug: false,
            orm: DriverConfig::default(),
            document: DriverConfig::default(),
            services: Vec::new(),
        }
    }
}

impl KernelConfig {
    /// Load a configuration file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading {} configuration from {}", format.extension(), path.display());
        Self::parse(&data, format)
    }

    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| ConfigError::deserialization("json", e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| ConfigError::deserialization("yaml", e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| ConfigError::deserialization("toml", e)),
        }
    }

    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| ConfigError::serialization("json", e)),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| ConfigError::serialization("yaml", e)),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::serialization("toml", e)),
        }
    }

    /// Register every entry of the service table, in file order.
    pub fn register_services(&self, container: &mut ContainerBuilder) -> ContainerResult<()> {
        for service in &self.services {
            container.register(service.id.clone(), service.to_definition())?;
        }
        Ok(())
    }
}
