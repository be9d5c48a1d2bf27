//! Make command implementation.

use anyhow::{Context, Result};
use explorer_core::assets::{FONT_FILE, SCRIPT_FILE, STYLESHEET_FILE, WORKER_FILE};
use explorer_core::{
    AssetRegistry, DirectorySite, Project, SiteWriter, ViewerAsset, ViewerAssetSet,
};
use explorer_render::{render_body_scripts, render_head_links, render_index};
use include_dir::{include_dir, Dir};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "_site";
pub const INDEX_FILE_NAME: &str = "index.html";

// Embed the viewer bundle at compile time so it's available after cargo install
static VIEWER_BUNDLE: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/viewer");

pub struct MakeOptions {
    pub output: PathBuf,
    pub viewer_assets: Option<PathBuf>,
}

#[derive(Debug)]
pub struct MakeSummary {
    pub output_dir: PathBuf,
    pub documents: usize,
    pub files_written: usize,
}

/// Build the explorer site for the project at `project_path`
pub fn make_site(project_path: &Path, opts: &MakeOptions) -> Result<MakeSummary> {
    tracing::info!("Loading project from {:?}", project_path);
    let project = Project::from_path(project_path).context("Failed to load project")?;

    let viewer_assets = match &opts.viewer_assets {
        Some(dir) => ViewerAssetSet::from_dir(dir)
            .with_context(|| format!("Failed to load viewer assets from {:?}", dir))?,
        None => embedded_viewer_assets()?,
    };

    let output_dir = project.resolve(&opts.output);
    let mut site = DirectorySite::new(&output_dir);

    let registry = bundle_project(&project, &viewer_assets, &mut site)?;

    let summary = MakeSummary {
        output_dir,
        documents: registry.len(),
        files_written: site.written().len(),
    };

    tracing::info!("✓ Bundled {} documents", summary.documents);
    tracing::info!(
        "✓ Wrote {} files to {:?}",
        summary.files_written,
        summary.output_dir
    );

    Ok(summary)
}

/// Register every document of `project` and write the complete site into `site`
pub fn bundle_project<W: SiteWriter>(
    project: &Project,
    viewer_assets: &ViewerAssetSet,
    site: &mut W,
) -> Result<AssetRegistry> {
    let config = &project.config;
    let title = config.site_title();
    tracing::info!("Building site: {}", title);

    let mut builder = AssetRegistry::builder(title);
    for (document_uri, path) in &config.files {
        let resolved = project.resolve(path);
        builder
            .add(document_uri, &resolved)
            .with_context(|| format!("Failed to add document {}", document_uri))?;
    }
    let registry = builder.build();
    tracing::info!("Registered {} documents", registry.len());

    let links = render_head_links(config.icons(), viewer_assets)?;
    let scripts = render_body_scripts(viewer_assets)?;

    for asset in viewer_assets.iter() {
        site.write(&asset.file_name, &asset.contents)?;
    }

    for icon in config.icons() {
        let bytes = project
            .read(&icon.asset)
            .with_context(|| format!("Failed to read icon {:?}", icon.asset))?;
        site.write(&icon.file_name(), &bytes)?;
    }

    for (path, file_name) in config.assets() {
        let bytes = project
            .read(path)
            .with_context(|| format!("Failed to read asset {:?}", path))?;
        site.write(file_name, &bytes)?;
    }

    let index = render_index(&registry, &links, &scripts, viewer_assets)
        .context("Failed to render index page")?;
    site.write(INDEX_FILE_NAME, &index)?;

    for (_, record) in registry.iter() {
        site.write(&record.file_name, &record.buffer)?;
    }

    Ok(registry)
}

/// The viewer bundle compiled into the binary
pub fn embedded_viewer_assets() -> Result<ViewerAssetSet> {
    Ok(ViewerAssetSet::new(
        embedded_asset(STYLESHEET_FILE)?,
        embedded_asset(FONT_FILE)?,
        embedded_asset(SCRIPT_FILE)?,
        embedded_asset(WORKER_FILE)?,
    ))
}

fn embedded_asset(file_name: &str) -> Result<ViewerAsset> {
    let file = VIEWER_BUNDLE
        .get_file(file_name)
        .with_context(|| format!("Viewer bundle is missing {}", file_name))?;
    Ok(ViewerAsset::new(file_name, file.contents()))
}
