use std::collections::HashMap;
use std::path::PathBuf;

use xref_core::index::UnitFacts;
use xref_core::merge::ProjectRoot;
use xref_core::model::{Ref, RefKind, Symbol, SymbolId, SymbolKind, SymbolLocation};
use xref_core::services::{AnalyzeError, IndexRunner, TranslationUnit, UnitAnalyzer};
use xref_core::slab::{RefSlab, SymbolSlab};

/// Serves canned facts keyed by unit name; unknown units fail.
struct InMemoryAnalyzer {
    units: HashMap<String, UnitFacts>,
}

impl UnitAnalyzer for InMemoryAnalyzer {
    fn analyze(&self, unit: &TranslationUnit) -> Result<UnitFacts, AnalyzeError> {
        self.units
            .get(&unit.name)
            .cloned()
            .ok_or_else(|| AnalyzeError::Analyzer(format!("no facts for {}", unit.name)))
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

fn counter() -> SymbolId {
    SymbolId::from_usr("c:@F@counter")
}

fn facts_for(file: &str) -> UnitFacts {
    let symbol = Symbol { references: 1, ..Symbol::new(counter(), SymbolKind::Variable, "counter") };
    let reference = Ref::new(SymbolLocation::new(format!("file:///proj/{file}")), RefKind::WRITE);
    UnitFacts {
        symbols: SymbolSlab::from(vec![symbol]),
        refs: RefSlab::from_iter([(counter(), reference)]),
        ..UnitFacts::default()
    }
}

fn analyzer(names: &[&str]) -> InMemoryAnalyzer {
    InMemoryAnalyzer {
        units: names.iter().map(|name| (name.to_string(), facts_for(name))).collect(),
    }
}

fn unit(name: &str) -> TranslationUnit {
    TranslationUnit { name: name.to_string(), path: PathBuf::from(format!("/units/{name}")) }
}

#[test]
fn runner_merges_every_unit() {
    let names = ["a.cc", "b.cc", "c.cc", "d.cc"];
    let analyzer = analyzer(&names);
    let units: Vec<TranslationUnit> = names.iter().map(|n| unit(n)).collect();
    let runner = IndexRunner { analyzer: &analyzer, project_root: ProjectRoot::new("file:///proj"), jobs: Some(2) };

    let outcome = runner.run(&units).expect("run");
    assert_eq!(outcome.units_indexed, 4);
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.index.symbols.find(&counter()).map(|s| s.references), Some(4));
    assert_eq!(outcome.index.refs.num_refs(), 4);
}

#[test]
fn failing_units_are_reported_without_aborting_the_run() {
    let analyzer = analyzer(&["ok.cc"]);
    let units = vec![unit("missing2.cc"), unit("ok.cc"), unit("missing1.cc")];
    let runner = IndexRunner { analyzer: &analyzer, project_root: ProjectRoot::default(), jobs: Some(1) };

    let outcome = runner.run(&units).expect("run");
    assert_eq!(outcome.units_indexed, 1);
    let failed: Vec<&str> = outcome.failures.iter().map(|f| f.unit.as_str()).collect();
    assert_eq!(failed, vec!["missing1.cc", "missing2.cc"]);
    assert!(outcome.failures[0].error.contains("no facts for missing1.cc"));
    assert_eq!(outcome.index.symbols.len(), 1);
}

#[test]
fn worker_count_does_not_change_the_index() {
    let names: Vec<String> = (0..16).map(|n| format!("u{n}.cc")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let analyzer = analyzer(&refs);
    let units: Vec<TranslationUnit> = refs.iter().map(|n| unit(n)).collect();

    let run = |jobs| {
        IndexRunner { analyzer: &analyzer, project_root: ProjectRoot::new("file:///proj"), jobs }
            .run(&units)
            .expect("run")
            .index
    };
    assert_eq!(run(Some(1)), run(Some(4)));
    assert_eq!(run(Some(1)), run(None));
}

#[test]
fn empty_unit_list_yields_empty_index() {
    let analyzer = analyzer(&[]);
    let runner = IndexRunner { analyzer: &analyzer, project_root: ProjectRoot::default(), jobs: None };
    let outcome = runner.run(&[]).expect("run");
    assert_eq!(outcome.units_indexed, 0);
    assert!(outcome.index.symbols.is_empty());
}

#[test]
fn translation_unit_is_named_after_its_file() {
    let unit = TranslationUnit::from_path("/tmp/units/foo.cc.json");
    assert_eq!(unit.name, "foo.cc.json");
    assert_eq!(unit.path, PathBuf::from("/tmp/units/foo.cc.json"));
}
