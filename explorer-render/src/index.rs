//! Assembly of the site entry document.

use crate::templates::{BodyScriptsTemplate, HeadLinksTemplate, IconLink, IndexTemplate, PreloadEntry};
use askama::Template;
use explorer_core::{AssetRegistry, IconConfig, ViewerAssetSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
}

/// Render the icon links followed by the stylesheet link
pub fn render_head_links(
    icons: &[IconConfig],
    assets: &ViewerAssetSet,
) -> Result<String, RenderError> {
    let icons = icons
        .iter()
        .map(|icon| IconLink {
            mime_type: icon.mime_type.clone(),
            sizes: icon.sizes.clone().unwrap_or_default(),
            has_sizes: icon.sizes.is_some(),
            href: icon.file_name(),
        })
        .collect();

    let template = HeadLinksTemplate {
        icons,
        stylesheet_href: assets.stylesheet.file_name.clone(),
    };
    Ok(template.render()?)
}

/// Render the script tag that boots the viewer
pub fn render_body_scripts(assets: &ViewerAssetSet) -> Result<String, RenderError> {
    let template = BodyScriptsTemplate {
        script_href: assets.script.file_name.clone(),
    };
    Ok(template.render()?)
}

/// Render the HTML entry document for `registry`.
///
/// `head_links` and `body_scripts` are inserted verbatim. Every registry entry
/// gets exactly one `as="fetch"` preload link carrying its URI in `data-uri`.
pub fn render_index(
    registry: &AssetRegistry,
    head_links: &str,
    body_scripts: &str,
    assets: &ViewerAssetSet,
) -> Result<Vec<u8>, RenderError> {
    let preloads = registry
        .iter()
        .map(|(uri, record)| PreloadEntry {
            document_uri: uri.to_string(),
            content_type: record.content_type().to_string(),
            href: record.file_name.clone(),
        })
        .collect();

    let template = IndexTemplate {
        title: registry.title().to_string(),
        head_links: head_links.to_string(),
        body_scripts: body_scripts.to_string(),
        font_type: assets.font_mime_type().to_string(),
        font_href: assets.font.file_name.clone(),
        worker_href: assets.worker.file_name.clone(),
        preloads,
    };

    Ok(template.render()?.into_bytes())
}
