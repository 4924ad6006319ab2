//! Pre-extracted per-unit facts stored as JSON or YAML files.
//!
//! Lets the merge engine run end to end without an in-process parser: an
//! external extractor writes one facts file per translation unit and
//! [`FactsFileAnalyzer`] loads them back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::index::UnitFacts;
use crate::model::{Ref, RefKind, Relation, Symbol, SymbolId, SymbolLocation};
use crate::services::driver::{AnalyzeError, TranslationUnit, UnitAnalyzer};
use crate::slab::{RefSlabBuilder, RelationSlabBuilder, SymbolSlabBuilder};

/// Extensions recognized as facts files.
pub const FACTS_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// One ref entry in a facts file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefFact {
    pub symbol: SymbolId,
    pub location: SymbolLocation,
    pub kind: RefKind,
}

/// On-disk shape of one unit's facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsFile {
    pub symbols: Vec<Symbol>,
    pub refs: Vec<RefFact>,
    pub relations: Vec<Relation>,
}

impl FactsFile {
    /// Parse a facts file, choosing JSON or YAML by extension.
    pub fn load(path: &Path) -> Result<Self, AnalyzeError> {
        let body = fs::read_to_string(path)
            .map_err(|source| AnalyzeError::Io { path: path.to_path_buf(), source })?;
        let parse_err =
            |message: String| AnalyzeError::Parse { path: path.to_path_buf(), message };
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&body).map_err(|e| parse_err(e.to_string())),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&body).map_err(|e| parse_err(e.to_string()))
            }
            _ => Err(AnalyzeError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Build the unit's slabs. A symbol id listed twice keeps its last record.
    pub fn into_unit_facts(self) -> UnitFacts {
        let mut symbols = SymbolSlabBuilder::new();
        for symbol in self.symbols {
            symbols.insert(symbol);
        }
        let mut refs = RefSlabBuilder::new();
        for fact in self.refs {
            refs.insert(fact.symbol, Ref::new(fact.location, fact.kind));
        }
        let mut relations = RelationSlabBuilder::new();
        for relation in self.relations {
            relations.insert(relation);
        }
        UnitFacts { symbols: symbols.build(), refs: refs.build(), relations: relations.build() }
    }
}

/// Analyzer that reads each unit's facts from the file at its path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FactsFileAnalyzer;

impl UnitAnalyzer for FactsFileAnalyzer {
    fn analyze(&self, unit: &TranslationUnit) -> Result<UnitFacts, AnalyzeError> {
        if !unit.path.is_file() {
            return Err(AnalyzeError::MissingUnit(unit.path.clone()));
        }
        Ok(FactsFile::load(&unit.path)?.into_unit_facts())
    }

    fn name(&self) -> &'static str {
        "facts-file"
    }
}

pub fn is_facts_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|ext| FACTS_EXTENSIONS.contains(&ext))
}

/// List the facts files directly under `dir`, sorted by path.
pub fn discover_units(dir: &Path) -> Result<Vec<TranslationUnit>> {
    let mut units = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if is_facts_file(&path) {
            units.push(TranslationUnit::from_path(path));
        }
    }
    units.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(units)
}
