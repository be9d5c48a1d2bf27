//! Registry of fingerprinted documents keyed by document URI.

use crate::content::{fingerprinted_file_name, ContentKind};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A bundled document: its output name, content type and raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub file_name: String,
    pub kind: ContentKind,
    pub buffer: Vec<u8>,
}

impl AssetRecord {
    pub fn new(source_path: &Path, buffer: Vec<u8>) -> Self {
        let kind = ContentKind::classify(source_path);
        Self {
            file_name: fingerprinted_file_name(source_path, &buffer, kind),
            kind,
            buffer,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }
}

/// Accumulates documents before they are frozen into an [`AssetRegistry`]
#[derive(Debug)]
pub struct RegistryBuilder {
    title: String,
    entries: BTreeMap<String, AssetRecord>,
}

impl RegistryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Read `path` and register it under `document_uri`.
    ///
    /// A later registration of the same URI replaces the earlier one.
    pub fn add(&mut self, document_uri: &str, path: &Path) -> Result<(), RegistryError> {
        let buffer = fs::read(path).map_err(|source| RegistryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_bytes(document_uri, path, buffer);
        Ok(())
    }

    /// Register bytes that were already read from `path`
    pub fn add_bytes(&mut self, document_uri: &str, path: &Path, buffer: Vec<u8>) {
        let record = AssetRecord::new(path, buffer);
        tracing::debug!("Registered {} as {}", document_uri, record.file_name);

        if let Some(previous) = self.entries.insert(document_uri.to_string(), record) {
            tracing::warn!(
                "Document URI {} registered more than once; replacing {}",
                document_uri,
                previous.file_name
            );
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> AssetRegistry {
        AssetRegistry {
            title: self.title,
            entries: self.entries,
        }
    }
}

/// Immutable set of bundled documents plus the site title
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    title: String,
    entries: BTreeMap<String, AssetRecord>,
}

impl AssetRegistry {
    pub fn builder(title: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn get(&self, document_uri: &str) -> Option<&AssetRecord> {
        self.entries.get(document_uri)
    }

    /// All `(document URI, record)` pairs, ordered by URI
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetRecord)> {
        self.entries.iter().map(|(uri, record)| (uri.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AssetRegistry {
    type Item = (&'a String, &'a AssetRecord);
    type IntoIter = std::collections::btree_map::Iter<'a, String, AssetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
