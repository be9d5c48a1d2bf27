//! # explorer-core
//!
//! Core library for the RDF explorer site bundler.
//!
//! This crate resolves projects, classifies and fingerprints source documents,
//! and provides the sinks generated files are written to.

pub mod assets;
pub mod config;
pub mod content;
pub mod project;
pub mod registry;
pub mod site;

pub use assets::{ViewerAsset, ViewerAssetSet};
pub use config::{Config, IconConfig, SiteOptions, DEFAULT_TITLE};
pub use content::{fingerprint, ContentKind};
pub use project::{Project, ProjectError};
pub use registry::{AssetRecord, AssetRegistry, RegistryBuilder, RegistryError};
pub use site::{DirectorySite, MemorySite, SiteError, SiteWriter};
