use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use xref_core::model::{
    Ref, RefKind, Relation, RelationKind, Symbol, SymbolId, SymbolKind, SymbolLocation,
    SymbolOrigin,
};
use xref_core::services::{FactsFile, RefFact};
use xref_merge::commands::{load_index, merge_command, MergeArgs};

fn foo() -> SymbolId {
    SymbolId::from_usr("c:@F@foo")
}

fn write_unit(dir: &Path, file: &str, defines: bool) -> PathBuf {
    let symbol = Symbol {
        canonical_declaration: Some(SymbolLocation::new("file:///proj/foo.h")),
        definition: defines.then(|| SymbolLocation::new("file:///proj/foo.cc")),
        references: 1,
        documentation: if defines { "Does foo.".into() } else { String::new() },
        origin: SymbolOrigin::STATIC,
        ..Symbol::new(foo(), SymbolKind::Function, "foo")
    };
    let facts = FactsFile {
        symbols: vec![symbol],
        refs: vec![RefFact {
            symbol: foo(),
            location: SymbolLocation::new(format!("file:///proj/{file}")),
            kind: RefKind::REFERENCE,
        }],
        relations: vec![Relation::new(
            SymbolId::from_usr("c:@S@Base"),
            RelationKind::BaseOf,
            SymbolId::from_usr("c:@S@Derived"),
        )],
    };
    let path = dir.join(format!("{file}.json"));
    fs::write(&path, serde_json::to_string_pretty(&facts).unwrap()).unwrap();
    path
}

fn args(out: PathBuf) -> MergeArgs {
    MergeArgs {
        project_root: Some("file:///proj".into()),
        out: Some(out),
        ..MergeArgs::default()
    }
}

#[test]
fn merge_writes_combined_index() {
    let tmp = tempdir().unwrap();
    let a = write_unit(tmp.path(), "a.cc", false);
    let b = write_unit(tmp.path(), "b.cc", true);
    let out = tmp.path().join("out").join("index.json");

    let summary = merge_command(&MergeArgs { units: vec![a, b], ..args(out.clone()) }).unwrap();
    assert_eq!(summary.units, 2);
    assert_eq!(summary.units_indexed, 2);
    assert!(summary.failures.is_empty());
    assert_eq!(summary.project_root, "file:///proj");

    let index = load_index(&out).unwrap();
    let symbol = index.symbols.find(&foo()).expect("foo merged");
    assert_eq!(symbol.references, 2);
    assert_eq!(symbol.documentation, "Does foo.");
    assert!(symbol.origin.contains(SymbolOrigin::MERGE));
    assert_eq!(index.refs.find(&foo()).map(<[Ref]>::len), Some(2));
    assert_eq!(index.relations.len(), 1);
}

#[test]
fn merge_scans_units_dir_and_honors_config() {
    let tmp = tempdir().unwrap();
    let units = tmp.path().join("units");
    fs::create_dir_all(&units).unwrap();
    write_unit(&units, "a.cc", false);
    write_unit(&units, "b.cc", true);
    fs::write(units.join("notes.txt"), "skip me").unwrap();

    let out = tmp.path().join("from-config.json");
    let config = tmp.path().join("xref.yaml");
    fs::write(
        &config,
        format!(
            "project_root: file:///proj\njobs: 2\nunits_dir: {}\noutput: {}\n",
            units.display(),
            out.display()
        ),
    )
    .unwrap();

    let summary =
        merge_command(&MergeArgs { config: Some(config), compact: true, ..MergeArgs::default() })
            .unwrap();
    assert_eq!(summary.units, 2);
    assert_eq!(summary.output, out);
    assert_eq!(summary.stats.symbols, 1);
    assert_eq!(summary.stats.symbols_with_definition, 1);

    let body = fs::read_to_string(&out).unwrap();
    assert!(!body.contains('\n'), "compact output should be a single line");
}

#[test]
fn command_line_overrides_config() {
    let tmp = tempdir().unwrap();
    let unit = write_unit(tmp.path(), "a.cc", true);
    let config = tmp.path().join("xref.json");
    fs::write(&config, r#"{ "project_root": "file:///elsewhere", "jobs": 8 }"#).unwrap();
    let out = tmp.path().join("index.json");

    let summary = merge_command(&MergeArgs {
        units: vec![unit],
        config: Some(config),
        jobs: Some(1),
        ..args(out)
    })
    .unwrap();
    assert_eq!(summary.project_root, "file:///proj");
}

#[test]
fn failed_units_are_summarized_unless_strict() {
    let tmp = tempdir().unwrap();
    let good = write_unit(tmp.path(), "a.cc", true);
    let missing = tmp.path().join("missing.json");
    let out = tmp.path().join("index.json");

    let summary =
        merge_command(&MergeArgs { units: vec![good.clone(), missing.clone()], ..args(out.clone()) })
            .unwrap();
    assert_eq!(summary.units_indexed, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].unit, "missing.json");
    assert!(out.exists());

    let err = merge_command(&MergeArgs {
        units: vec![good, missing],
        fail_on_unit_error: true,
        ..args(out)
    })
    .unwrap_err();
    assert!(err.to_string().contains("1 translation unit(s) failed"), "unexpected error: {err}");
}

#[test]
fn merge_requires_units() {
    let tmp = tempdir().unwrap();
    let err = merge_command(&args(tmp.path().join("index.json"))).unwrap_err();
    assert!(err.to_string().contains("No translation units given"));
}

#[test]
fn merge_rejects_zero_jobs() {
    let tmp = tempdir().unwrap();
    let unit = write_unit(tmp.path(), "a.cc", true);
    let err = merge_command(&MergeArgs {
        units: vec![unit],
        jobs: Some(0),
        ..args(tmp.path().join("index.json"))
    })
    .unwrap_err();
    assert!(err.to_string().contains("--jobs must be at least 1"));
}

#[test]
fn merge_reports_bad_config() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("xref.yaml");
    fs::write(&config, "project_root: relative/dir\n").unwrap();
    let err = merge_command(&MergeArgs { config: Some(config), ..MergeArgs::default() }).unwrap_err();
    assert!(err.to_string().contains("Failed to load config"), "unexpected error: {err}");
}
