use crate::conf::{ConfigError, discover, resolve_glob};

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn discover_returns_sorted_matching_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("z.yaml"), "").unwrap();
    fs::write(root.join("a.yaml"), "").unwrap();
    fs::write(root.join("notes.txt"), "").unwrap();

    // Act
    let result = discover(root, "*.yaml").unwrap();

    // Assert
    assert_eq!(result, vec![root.join("a.yaml"), root.join("z.yaml")]);
}

#[test]
fn discover_supports_recursive_globs() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("team-a/web")).unwrap();
    fs::write(root.join("root.yaml"), "").unwrap();
    fs::write(root.join("team-a/a.yaml"), "").unwrap();
    fs::write(root.join("team-a/web/b.yaml"), "").unwrap();

    // Act
    let result = discover(root, "**/*.yaml").unwrap();

    // Assert
    assert_eq!(
        result,
        vec![
            root.join("root.yaml"),
            root.join("team-a/a.yaml"),
            root.join("team-a/web/b.yaml"),
        ]
    );
}

#[test]
fn discover_filters_out_directories() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("ingress.yaml")).unwrap();

    // Act
    let result = discover(root, "*.yaml").unwrap();

    // Assert
    assert!(result.is_empty());
}

#[test]
fn discover_returns_error_for_invalid_glob() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = discover(dir.path(), "[").unwrap_err();

    // Assert
    match err {
        ConfigError::Glob { pattern, .. } => assert!(pattern.contains('[')),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn resolve_glob_preserves_subdirectories() {
    let resolved = resolve_glob(Path::new("/etc/ingressgw"), "ingress.d/**/*.yaml");

    assert_eq!(resolved, "/etc/ingressgw/ingress.d/**/*.yaml");
}
