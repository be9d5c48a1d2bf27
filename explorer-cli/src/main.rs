//! # rdf-explorer CLI
//!
//! Command-line interface for the RDF explorer site bundler.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rdf-explorer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project file, or a directory containing rdfconfig.json
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new explorer project
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Bundle the project's documents into a static explorer site
    Make {
        /// Output directory, relative to the project directory
        #[arg(long, default_value = commands::make::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Directory holding a custom viewer bundle (stylesheet, font, scripts)
        #[arg(long)]
        viewer_assets: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::Make {
            output,
            viewer_assets,
        } => {
            let opts = commands::MakeOptions {
                output,
                viewer_assets,
            };
            commands::make_site(&cli.project, &opts).map(|_| ())
        }
    }
}
