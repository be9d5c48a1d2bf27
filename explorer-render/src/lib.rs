//! # explorer-render
//!
//! Index page rendering for the RDF explorer site bundler.
//!
//! This crate assembles the single HTML entry point of a generated site using
//! Askama templates.

pub mod index;
pub mod templates;

pub use index::{render_body_scripts, render_head_links, render_index, RenderError};
pub use templates::{BodyScriptsTemplate, HeadLinksTemplate, IconLink, IndexTemplate, PreloadEntry};
