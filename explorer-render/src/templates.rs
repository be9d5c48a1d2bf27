//! Askama template definitions.

use askama::Template;

/// A `<link rel="icon">` entry in the document head
#[derive(Debug, Clone)]
pub struct IconLink {
    pub mime_type: String,
    pub sizes: String,
    pub has_sizes: bool,
    pub href: String,
}

/// Preload hint for one bundled document
#[derive(Debug, Clone)]
pub struct PreloadEntry {
    pub document_uri: String,
    pub content_type: String,
    pub href: String,
}

/// Icon and stylesheet links inserted into the head
#[derive(Template)]
#[template(path = "head_links.html")]
pub struct HeadLinksTemplate {
    pub icons: Vec<IconLink>,
    pub stylesheet_href: String,
}

/// Main script tag inserted at the end of the body
#[derive(Template)]
#[template(path = "body_scripts.html")]
pub struct BodyScriptsTemplate {
    pub script_href: String,
}

/// The site entry point
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,

    // Pre-rendered fragments, inserted verbatim
    pub head_links: String,
    pub body_scripts: String,

    pub font_type: String,
    pub font_href: String,
    pub worker_href: String,

    pub preloads: Vec<PreloadEntry>,
}
