//! Output sinks for generated site files.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for generated files, addressed by site-relative name
pub trait SiteWriter {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), SiteError>;
}

/// Writes files into an output directory
#[derive(Debug)]
pub struct DirectorySite {
    output_dir: PathBuf,
    written: BTreeSet<String>,
}

impl DirectorySite {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: BTreeSet::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Names written so far during this build
    pub fn written(&self) -> &BTreeSet<String> {
        &self.written
    }
}

impl SiteWriter for DirectorySite {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), SiteError> {
        let target = self.output_dir.join(file_name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| SiteError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&target, bytes).map_err(|source| SiteError::Write {
            path: target.clone(),
            source,
        })?;

        if !self.written.insert(file_name.to_string()) {
            tracing::warn!("{} written more than once; keeping the last copy", file_name);
        }
        tracing::debug!("Wrote {:?} ({} bytes)", target, bytes.len());
        Ok(())
    }
}

/// Keeps generated files in memory
#[derive(Debug, Default)]
pub struct MemorySite {
    pub files: BTreeMap<String, Vec<u8>>,
}

impl MemorySite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files.get(file_name).map(Vec::as_slice)
    }
}

impl SiteWriter for MemorySite {
    fn write(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), SiteError> {
        self.files.insert(file_name.to_string(), bytes.to_vec());
        Ok(())
    }
}
