use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::tempdir;

fn write_facts(path: &Path, usr: &str, name: &str, definition: Option<&str>) {
    let id = xref_core::model::SymbolId::from_usr(usr);
    let definition = definition
        .map(|uri| format!(r#", "definition": {{ "file_uri": "{uri}" }}"#))
        .unwrap_or_default();
    let body = format!(
        r#"{{
  "symbols": [
    {{ "id": "{id}", "kind": "class", "name": "{name}", "scope": "geo::",
       "canonical_declaration": {{ "file_uri": "file:///proj/shape.h" }}{definition},
       "references": 1, "origin": "STATIC" }}
  ],
  "refs": [
    {{ "symbol": "{id}", "location": {{ "file_uri": "file:///proj/shape.h", "range": {{ "start": 6, "end": 11 }} }}, "kind": "DECLARATION | SPELLED" }}
  ]
}}"#
    );
    fs::write(path, body).expect("write facts");
}

/// Running the CLI without a subcommand prints usage and fails.
#[test]
fn missing_subcommand_is_an_error() {
    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn merge_then_inspect_round_trip() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    write_facts(&root.join("a.json"), "c:@N@geo@S@Shape", "Shape", None);
    write_facts(&root.join("b.json"), "c:@N@geo@S@Shape", "Shape", Some("file:///proj/shape.cc"));

    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(root)
        .args(["merge", "a.json", "b.json", "--project-root", "file:///proj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged index:"))
        .stdout(predicate::str::contains("Units: 2 indexed / 2 given"))
        .stdout(predicate::str::contains("Symbols: 1 (1 merged, 1 defined)"));

    assert!(root.join("index.json").exists(), "default output should be index.json");

    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(root)
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("Symbols: 1"))
        .stdout(predicate::str::contains("Refs: 1 across 1 symbols"));

    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(root)
        .args(["inspect", "--symbol", "geo::Shape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("geo::Shape [class]"))
        .stdout(predicate::str::contains("Definition: file:///proj/shape.cc"))
        .stdout(predicate::str::contains("References: 2"));
}

#[test]
fn inspect_json_emits_stats_object() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    write_facts(&root.join("a.json"), "c:@F@area", "area", Some("file:///proj/area.cc"));
    let out = root.join("nested").join("idx.json");

    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(root)
        .args(["merge", "--units-dir", ".", "--project-root", "file:///proj", "--out"])
        .arg(&out)
        .assert()
        .success();

    let output = assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .args(["inspect", "--json", "--index"])
        .arg(&out)
        .output()
        .expect("run inspect");
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stats json");
    assert_eq!(stats["symbols"], 1);
    assert_eq!(stats["merged_symbols"], 0);
}

#[test]
fn strict_merge_fails_on_missing_unit() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    write_facts(&root.join("a.json"), "c:@F@area", "area", None);

    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(root)
        .args(["merge", "a.json", "gone.json", "--project-root", "file:///proj"])
        .arg("--fail-on-unit-error")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed units (1):"))
        .stderr(predicate::str::contains("translation unit(s) failed to index"));
}

#[test]
fn merge_without_units_fails() {
    let dir = tempdir().expect("tempdir");
    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(dir.path())
        .arg("merge")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No translation units given"));
}

#[test]
fn inspect_unknown_symbol_fails() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path();
    write_facts(&root.join("a.json"), "c:@F@area", "area", None);

    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(root)
        .args(["merge", "a.json", "--project-root", "file:///proj"])
        .assert()
        .success();

    assert_cmd::cargo::cargo_bin_cmd!("xref-merge")
        .current_dir(root)
        .args(["inspect", "--symbol", "perimeter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No symbol matching 'perimeter'"));
}
