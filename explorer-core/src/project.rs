//! Project resolution: locates the project file and resolves paths against it.

use crate::config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Failed to load project {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded project file together with the directory it lives in
#[derive(Debug, Clone)]
pub struct Project {
    pub config: Config,
    root: PathBuf,
    config_path: PathBuf,
}

impl Project {
    /// Load a project from a project file, or from a directory containing `rdfconfig.json`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let config_path = if path.is_dir() {
            path.join(DEFAULT_CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        tracing::debug!("Loading project from {:?}", config_path);
        let config = Config::from_file(&config_path).map_err(|source| ProjectError::Config {
            path: config_path.clone(),
            source,
        })?;

        Ok(Self::with_config(config, &config_path))
    }

    /// Build a project from an already parsed config located at `config_path`
    pub fn with_config(config: Config, config_path: &Path) -> Self {
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self {
            config,
            root,
            config_path: config_path.to_path_buf(),
        }
    }

    /// Directory containing the project file
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve a path relative to the project directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Read all bytes of a project-relative file
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, ProjectError> {
        let resolved = self.resolve(path);
        fs::read(&resolved).map_err(|source| ProjectError::Read {
            path: resolved,
            source,
        })
    }
}
