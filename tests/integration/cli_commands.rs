//! Integration tests for the command route table

use super::test_utils::populate;
use clap::Parser;
use dirdiff::cli::{Cli, RunContext};
use dirdiff::config::DirDiffConfig;
use dirdiff::error::ApiError;
use std::fs;
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<String, ApiError> {
    let cli = Cli::try_parse_from(args).unwrap();
    RunContext::with_config(DirDiffConfig::default())
        .unwrap()
        .execute(&cli.command)
}

#[test]
fn test_show_without_state() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    populate(&root, &[], &["src/main.rs", "README"]);

    let out = run(&[
        "dirdiff",
        "show",
        root.to_str().unwrap(),
        "--no-state",
        "--color",
        "never",
    ])
    .unwrap();
    assert_eq!(out, "proj\n  src\n    main.rs\n  README");
}

#[test]
fn test_compare_json_output_feeds_back_in() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("base");
    let other = temp_dir.path().join("other");
    populate(&base, &[], &["a", "b"]);
    populate(&other, &[], &["b", "c"]);

    let out = run(&[
        "dirdiff",
        "compare",
        base.to_str().unwrap(),
        other.to_str().unwrap(),
        "--format",
        "json",
    ])
    .unwrap();
    let saved = temp_dir.path().join("result.json");
    fs::write(&saved, &out).unwrap();

    // A result tree is itself canonical
    let validated = run(&["dirdiff", "validate", saved.to_str().unwrap()]).unwrap();
    assert!(validated.ends_with(": valid"));

    let shown = run(&[
        "dirdiff",
        "show",
        saved.to_str().unwrap(),
        "--json-input",
        "--color",
        "never",
    ])
    .unwrap();
    assert_eq!(shown, "base (MIXED)\n\ta (DELETED)\n\tb (SAME)\n\tc (ADDED)");
}

#[test]
fn test_compare_json_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");
    fs::write(
        &first,
        r#"{"kind":"branch","name":"1.","children":[
            {"kind":"branch","name":"A.","children":[{"kind":"leaf","name":"a1"}]}]}"#,
    )
    .unwrap();
    fs::write(
        &second,
        r#"{"kind":"branch","name":"1.","children":[
            {"kind":"branch","name":"A.","children":[]}]}"#,
    )
    .unwrap();

    let out = run(&[
        "dirdiff",
        "compare",
        first.to_str().unwrap(),
        second.to_str().unwrap(),
        "--json-input",
        "--color",
        "never",
        "--summary",
    ])
    .unwrap();
    assert!(out.starts_with("1. (DELETED)\n\tA. (DELETED)\n\t\ta1 (DELETED)\n\n"));
    assert!(out.contains("DELETED"));
    assert!(out.contains("Directories"));
}

#[test]
fn test_unparseable_json_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, "{not json").unwrap();

    let err = run(&["dirdiff", "validate", bad.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, ApiError::Json { ref path, .. } if path == &bad));
    assert!(dirdiff::cli::map_error(&err).starts_with("error: "));
}
