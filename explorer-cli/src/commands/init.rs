//! Init command implementation.

use anyhow::{Context, Result};
use explorer_core::config::DEFAULT_CONFIG_FILE;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../rdfconfig.json.example");

/// Initialize a new explorer project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_if_missing(&root.join(DEFAULT_CONFIG_FILE), DEFAULT_CONFIG)?;
    write_if_missing(&root.join("ontology.ttl"), SAMPLE_ONTOLOGY)?;
    write_if_missing(&root.join("README.md"), SAMPLE_README)?;

    println!("✓ Explorer project initialized in {:?}", root);
    println!("  - Edit {} to list your documents", DEFAULT_CONFIG_FILE);
    println!("  - Run `rdf-explorer make` to build the site");
    Ok(())
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        println!("{:?} already exists, leaving it untouched", path);
        return Ok(());
    }

    fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Created {:?}", path);
    Ok(())
}

const SAMPLE_ONTOLOGY: &str = r#"@prefix ex: <http://example.org/ontology#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

<http://example.org/ontology> a owl:Ontology ;
    rdfs:label "Example Ontology" .

ex:Thing a owl:Class ;
    rdfs:label "Thing" ;
    rdfs:comment "Anything worth describing." .
"#;

const SAMPLE_README: &str = r#"# Example Ontology

This site was generated by `rdf-explorer make`. Add documents to
`rdfconfig.json` under `files`, keyed by the URI they describe.
"#;
