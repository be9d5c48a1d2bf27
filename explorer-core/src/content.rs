//! Content classification and fingerprinting for bundled documents.

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Number of hex characters of the SHA-256 digest kept in file names
pub const FINGERPRINT_LEN: usize = 12;

static MARKDOWN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(?:md|mkdn?|mdwn|mdown|markdown)$").unwrap());

/// Kind of a source document, inferred from its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Markdown,
    Turtle,
}

impl ContentKind {
    /// Classify a document by its file name.
    ///
    /// Markdown suffixes are matched case-insensitively; every other name is
    /// treated as Turtle.
    ///
    /// ```
    /// use explorer_core::ContentKind;
    ///
    /// assert_eq!(ContentKind::classify("notes/README.Markdown"), ContentKind::Markdown);
    /// assert_eq!(ContentKind::classify("ontology.ttl"), ContentKind::Turtle);
    /// assert_eq!(ContentKind::classify("LICENSE"), ContentKind::Turtle);
    /// ```
    pub fn classify<P: AsRef<Path>>(path: P) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        if MARKDOWN_SUFFIX.is_match(&name) {
            ContentKind::Markdown
        } else {
            ContentKind::Turtle
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ContentKind::Markdown => "text/markdown",
            ContentKind::Turtle => "text/turtle",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ContentKind::Markdown => "md",
            ContentKind::Turtle => "ttl",
        }
    }
}

/// Truncated hex SHA-256 of `bytes`
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hex = hex::encode(digest);
    hex.truncate(FINGERPRINT_LEN);
    hex
}

/// Output name `<stem>.<fingerprint>.<ext>` for a document read from `path`
pub fn fingerprinted_file_name(path: &Path, bytes: &[u8], kind: ContentKind) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    format!("{}.{}.{}", stem, fingerprint(bytes), kind.extension())
}
