//! Viewer assets shipped with every generated site.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STYLESHEET_FILE: &str = "explorer.min.css";
pub const SCRIPT_FILE: &str = "explorer.min.js";
pub const WORKER_FILE: &str = "worker.min.js";
pub const FONT_FILE: &str = "open-sans-light.woff2";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read viewer asset {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No font file found in {0:?}")]
    MissingFont(PathBuf),
}

/// A single file copied verbatim into the site under `file_name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerAsset {
    pub file_name: String,
    pub contents: Cow<'static, [u8]>,
}

impl ViewerAsset {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }

    fn read(path: &Path) -> Result<Self, AssetError> {
        let contents = fs::read(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(file_name, contents))
    }
}

/// Stylesheet, font, main script and worker script of the client viewer
#[derive(Debug, Clone)]
pub struct ViewerAssetSet {
    pub stylesheet: ViewerAsset,
    pub font: ViewerAsset,
    pub script: ViewerAsset,
    pub worker: ViewerAsset,
}

impl ViewerAssetSet {
    pub fn new(
        stylesheet: ViewerAsset,
        font: ViewerAsset,
        script: ViewerAsset,
        worker: ViewerAsset,
    ) -> Self {
        Self {
            stylesheet,
            font,
            script,
            worker,
        }
    }

    /// Load a viewer bundle from a directory.
    ///
    /// The stylesheet, script and worker use their conventional names; the font
    /// is the first `.woff2`/`.woff`/`.ttf`/`.otf` file in the directory.
    pub fn from_dir(dir: &Path) -> Result<Self, AssetError> {
        let font_path = find_font(dir)?;

        Ok(Self {
            stylesheet: ViewerAsset::read(&dir.join(STYLESHEET_FILE))?,
            font: ViewerAsset::read(&font_path)?,
            script: ViewerAsset::read(&dir.join(SCRIPT_FILE))?,
            worker: ViewerAsset::read(&dir.join(WORKER_FILE))?,
        })
    }

    /// Assets in the order they are written to the site
    pub fn iter(&self) -> impl Iterator<Item = &ViewerAsset> {
        [&self.stylesheet, &self.font, &self.script, &self.worker].into_iter()
    }

    /// MIME type used for the font preload hint
    pub fn font_mime_type(&self) -> &'static str {
        font_mime_type(&self.font.file_name)
    }
}

fn font_mime_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("woff") => "font/woff",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        _ => "font/woff2",
    }
}

fn find_font(dir: &Path) -> Result<PathBuf, AssetError> {
    let read_dir = fs::read_dir(dir).map_err(|source| AssetError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut fonts: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("woff2") | Some("woff") | Some("ttf") | Some("otf")
            )
        })
        .collect();
    fonts.sort();

    fonts
        .into_iter()
        .next()
        .ok_or_else(|| AssetError::MissingFont(dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STYLESHEET_FILE), "body{}").unwrap();
        fs::write(dir.path().join(SCRIPT_FILE), "main()").unwrap();
        fs::write(dir.path().join(WORKER_FILE), "onmessage=null").unwrap();
        fs::write(dir.path().join("custom.woff"), [0u8, 1, 2]).unwrap();

        let assets = ViewerAssetSet::from_dir(dir.path()).unwrap();
        assert_eq!(assets.stylesheet.contents.as_ref(), b"body{}");
        assert_eq!(assets.font.file_name, "custom.woff");
        assert_eq!(assets.font_mime_type(), "font/woff");

        let names: Vec<_> = assets.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![STYLESHEET_FILE, "custom.woff", SCRIPT_FILE, WORKER_FILE]
        );
    }

    #[test]
    fn test_from_dir_without_font() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STYLESHEET_FILE), "body{}").unwrap();

        let err = ViewerAssetSet::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, AssetError::MissingFont(_)));
    }

    #[test]
    fn test_from_dir_missing_script() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STYLESHEET_FILE), "body{}").unwrap();
        fs::write(dir.path().join(FONT_FILE), [0u8]).unwrap();

        let err = ViewerAssetSet::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
    }

    #[test]
    fn test_font_mime_types() {
        assert_eq!(font_mime_type("a.woff2"), "font/woff2");
        assert_eq!(font_mime_type("a.TTF"), "font/ttf");
        assert_eq!(font_mime_type("a.otf"), "font/otf");
        assert_eq!(font_mime_type("font"), "font/woff2");
    }
}
