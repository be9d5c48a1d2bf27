//! Project file parsing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Title used when the project does not configure one
pub const DEFAULT_TITLE: &str = "RDF Explorer";

/// Project file looked up when a directory is given
pub const DEFAULT_CONFIG_FILE: &str = "rdfconfig.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the rdfconfig.json schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Document URI -> source path (relative to the project file)
    #[serde(default)]
    pub files: BTreeMap<String, PathBuf>,

    #[serde(default)]
    pub site_options: Option<SiteOptions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOptions {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub icons: Vec<IconConfig>,

    /// Extra files copied into the site: source path -> output file name
    #[serde(default)]
    pub assets: BTreeMap<PathBuf, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    pub asset: PathBuf,

    #[serde(rename = "type")]
    pub mime_type: String,

    #[serde(default)]
    pub sizes: Option<String>,
}

impl IconConfig {
    /// Name the icon is published under (base name of `asset`)
    pub fn file_name(&self) -> String {
        self.asset
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yml") | Some("yaml")
        );

        if is_yaml {
            Self::from_yaml(&contents)
        } else {
            Self::from_json(&contents)
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Site title, falling back to [`DEFAULT_TITLE`] when unset or empty
    pub fn site_title(&self) -> String {
        self.site_options
            .as_ref()
            .and_then(|opts| opts.title.as_deref())
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }

    pub fn icons(&self) -> &[IconConfig] {
        self.site_options
            .as_ref()
            .map(|opts| opts.icons.as_slice())
            .unwrap_or_default()
    }

    /// Extra assets as (source path, output name) pairs
    pub fn assets(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.site_options
            .iter()
            .flat_map(|opts| opts.assets.iter())
            .map(|(path, name)| (path.as_path(), name.as_str()))
    }
}
