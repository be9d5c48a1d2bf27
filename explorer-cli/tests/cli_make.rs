use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use tempfile::tempdir;

const VIEWER_FILES: [&str; 4] = [
    "explorer.min.css",
    "explorer.min.js",
    "open-sans-light.woff2",
    "worker.min.js",
];

fn output_files(dir: &std::path::Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn make_bundles_documents_into_site() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.ttl"), "<urn:s> <urn:p> <urn:o> .\n")?;
    fs::write(dir.path().join("b.md"), "# Notes\n")?;
    fs::write(
        dir.path().join("rdfconfig.json"),
        r#"{
  "files": { "urn:doc1": "a.ttl", "urn:doc2": "b.md" },
  "siteOptions": { "title": "T" }
}"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("rdf-explorer")?
        .current_dir(dir.path())
        .args(["make", "--output", "out"])
        .assert()
        .success();

    let out = dir.path().join("out");
    let files = output_files(&out);
    assert_eq!(files.len(), 7, "{files:?}");
    assert!(files.contains("index.html"));
    for name in VIEWER_FILES {
        assert!(files.contains(name), "missing {name}");
    }

    let data_file = Regex::new(r"^(a\.[0-9a-f]{12}\.ttl|b\.[0-9a-f]{12}\.md)$")?;
    let data_files: Vec<_> = files.iter().filter(|f| data_file.is_match(f)).collect();
    assert_eq!(data_files.len(), 2, "{files:?}");

    let index = fs::read_to_string(out.join("index.html"))?;
    assert!(index.contains("<title>T</title>"));

    let preload = Regex::new(
        r#"<link rel="preload" type="([^"]*)" href="([^"]*)" as="fetch" crossorigin="anonymous" data-uri="([^"]*)">"#,
    )?;
    let preloads: Vec<_> = preload
        .captures_iter(&index)
        .map(|caps| (caps[3].to_string(), caps[1].to_string(), caps[2].to_string()))
        .collect();
    assert_eq!(preloads.len(), 2);
    for (uri, content_type, href) in &preloads {
        let source = match uri.as_str() {
            "urn:doc1" => {
                assert_eq!(content_type, "text/turtle");
                assert!(href.starts_with("a.") && href.ends_with(".ttl"));
                "a.ttl"
            }
            "urn:doc2" => {
                assert_eq!(content_type, "text/markdown");
                assert!(href.starts_with("b.") && href.ends_with(".md"));
                "b.md"
            }
            other => panic!("unexpected preload for {other}"),
        };
        assert_eq!(fs::read(out.join(href))?, fs::read(dir.path().join(source))?);
    }

    Ok(())
}

#[test]
fn make_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("vocab.ttl"), "<urn:a> <urn:b> <urn:c> .\n")?;
    fs::write(
        dir.path().join("rdfconfig.json"),
        r#"{ "files": { "urn:vocab": "vocab.ttl" } }"#,
    )?;

    for output in ["first", "second"] {
        #[allow(deprecated)]
        Command::cargo_bin("rdf-explorer")?
            .args(["--project"])
            .arg(dir.path())
            .args(["make", "--output", output])
            .assert()
            .success();
    }

    let first = output_files(&dir.path().join("first"));
    let second = output_files(&dir.path().join("second"));
    assert_eq!(first, second);
    assert_eq!(
        fs::read(dir.path().join("first/index.html"))?,
        fs::read(dir.path().join("second/index.html"))?
    );

    Ok(())
}

#[test]
fn make_fails_on_missing_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("rdfconfig.json"),
        r#"{ "files": { "urn:missing": "missing.ttl" } }"#,
    )?;

    #[allow(deprecated)]
    Command::cargo_bin("rdf-explorer")?
        .current_dir(dir.path())
        .arg("make")
        .assert()
        .failure()
        .stderr(predicate::str::contains("urn:missing"));

    assert!(!dir.path().join("_site").join("index.html").exists());
    Ok(())
}

#[test]
fn init_then_make() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("rdf-explorer")?
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("rdfconfig.json"));

    #[allow(deprecated)]
    Command::cargo_bin("rdf-explorer")?
        .current_dir(dir.path())
        .arg("make")
        .assert()
        .success();

    let index = fs::read_to_string(dir.path().join("_site/index.html"))?;
    assert!(index.contains("<title>Example Ontology</title>"));
    assert!(index.contains(r#"data-uri="http:"#));
    assert_eq!(index.matches(r#"as="fetch""#).count(), 2);
    Ok(())
}
