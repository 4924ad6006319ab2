use std::fs;

use tempfile::tempdir;
use xref_merge::{canonicalize_or_current, resolve_project_root};

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    fs::create_dir_all(&nested).expect("create nested");

    let result = canonicalize_or_current(nested.to_str().expect("utf8 path")).expect("canonicalize");
    assert_eq!(result, nested.canonicalize().expect("canonicalize nested"));
}

#[test]
fn canonicalize_or_current_joins_missing_relative_path_onto_cwd() {
    let result = canonicalize_or_current("does/not/exist/yet").expect("canonicalize");
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(result, cwd.join("does/not/exist/yet"));
}

#[test]
fn uri_project_roots_are_used_verbatim() {
    let root = resolve_project_root(Some("file:///src/proj/")).expect("resolve");
    assert_eq!(root.as_str(), "file:///src/proj");
}

#[test]
fn path_project_roots_become_file_uris() {
    let tmp = tempdir().expect("tempdir");
    let root = resolve_project_root(tmp.path().to_str()).expect("resolve");
    assert!(root.as_str().starts_with("file://"), "unexpected root {root}");
    assert!(!root.as_str().ends_with('/'));
}

#[test]
fn default_project_root_is_the_current_directory() {
    let root = resolve_project_root(None).expect("resolve");
    let cwd = std::env::current_dir().expect("cwd").canonicalize().expect("canon cwd");
    let expected = url::Url::from_file_path(&cwd).expect("file url");
    assert_eq!(root.as_str(), expected.as_str().trim_end_matches('/'));
}
