//! Integration tests for building trees from real directories and comparing them

use super::test_utils::populate;
use dirdiff::error::ScanError;
use dirdiff::tree::builder::TreeBuilder;
use dirdiff::tree::walker::WalkerConfig;
use dirdiff::tree::{validate, validate::DEFAULT_MAX_DEPTH};
use dirdiff::{merge, ChangeState, Node};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_scanned_tree_is_canonical() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    populate(
        &root,
        &["zeta", "alpha/empty"],
        &["b.txt", "a.txt", "zeta/z1", "alpha/a1"],
    );

    let tree = TreeBuilder::new(root).build().unwrap();
    assert!(validate(&tree, DEFAULT_MAX_DEPTH).is_ok());
    assert_eq!(tree.name(), "proj");

    let names: Vec<_> = tree.children().iter().map(Node::name).collect();
    assert_eq!(names, vec!["alpha", "zeta", "a.txt", "b.txt"]);

    let alpha = tree.child("alpha", true).and_then(Node::as_branch).unwrap();
    let names: Vec<_> = alpha.children().iter().map(Node::name).collect();
    assert_eq!(names, vec!["empty", "a1"]);
}

#[test]
fn test_scanned_trees_all_same() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    populate(&root, &["d"], &["d/f", "g"]);

    let tree = TreeBuilder::new(root).build().unwrap();
    let mut stack: Vec<&Node> = tree.children().iter().collect();
    assert_eq!(tree.state(), ChangeState::Same);
    while let Some(node) = stack.pop() {
        assert_eq!(node.state(), ChangeState::Same);
        if let Node::Branch(b) = node {
            stack.extend(b.children());
        }
    }
}

#[test]
fn test_compare_scanned_directories() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("base");
    let other = temp_dir.path().join("other");
    populate(&base, &["B."], &["A./a1", "A./a2"]);
    populate(&other, &["D."], &["A./a1", "A./a3", "B./b1", "C"]);

    let first = TreeBuilder::new(base).build().unwrap();
    let second = TreeBuilder::new(other).build().unwrap();
    let result = merge(&first, &second).unwrap();

    assert_eq!(
        result.print("", true),
        "base (MIXED)\n\
         \tA. (MIXED)\n\
         \t\ta1 (SAME)\n\
         \t\ta2 (DELETED)\n\
         \t\ta3 (ADDED)\n\
         \tB. (ADDED)\n\
         \t\tb1 (ADDED)\n\
         \tD. (ADDED)\n\
         \tC (ADDED)"
    );
}

#[test]
fn test_file_contents_are_not_compared() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("base");
    let other = temp_dir.path().join("other");
    fs::create_dir_all(&base).unwrap();
    fs::create_dir_all(&other).unwrap();
    fs::write(base.join("f"), "one").unwrap();
    fs::write(other.join("f"), "two").unwrap();

    let result = merge(
        &TreeBuilder::new(base).build().unwrap(),
        &TreeBuilder::new(other).build().unwrap(),
    )
    .unwrap();
    assert_eq!(result.state(), ChangeState::Same);
}

#[test]
fn test_ignore_patterns_skip_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    populate(&root, &[".git/objects"], &["keep.rs", "drop.tmp", ".git/HEAD"]);

    let config = WalkerConfig {
        ignore_patterns: vec![".git".to_string(), "*.tmp".to_string()],
        max_depth: None,
    };
    let tree = TreeBuilder::new(root)
        .with_walker_config(config)
        .build()
        .unwrap();

    let names: Vec<_> = tree.children().iter().map(Node::name).collect();
    assert_eq!(names, vec!["keep.rs"]);
}

#[test]
fn test_missing_root_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = TreeBuilder::new(temp_dir.path().join("nope")).build();
    assert!(matches!(result, Err(ScanError::InvalidPath(_))));
}

#[test]
fn test_file_root_reports_not_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file");
    fs::write(&file, "x").unwrap();
    assert!(matches!(
        TreeBuilder::new(file).build(),
        Err(ScanError::NotADirectory(_))
    ));
}

/// Two distinct on-disk names with one NFC form would otherwise merge into a
/// single node
#[cfg(target_os = "linux")]
#[test]
fn test_names_colliding_after_normalization_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("caf\u{e9}"), "composed").unwrap();
    fs::write(root.join("cafe\u{301}"), "decomposed").unwrap();

    let err = TreeBuilder::new(root).build().unwrap_err();
    assert!(matches!(
        err,
        ScanError::NameCollision { ref parent, ref name, .. }
            if parent == "proj" && name == "caf\u{e9}"
    ));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_names_rejected_in_nested_directory() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("proj");
    populate(&root, &["sub"], &[]);
    let bad = root.join("sub").join(OsStr::from_bytes(b"f\xff"));
    fs::write(&bad, "x").unwrap();

    let err = TreeBuilder::new(root).build().unwrap_err();
    assert!(matches!(err, ScanError::NonUnicodeName(ref path) if path.ends_with(OsStr::from_bytes(b"f\xff"))));
}
