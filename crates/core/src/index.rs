//! Per-unit fact bundles and the finalized cross-unit index.

use serde::{Deserialize, Serialize};

use crate::model::{Symbol, SymbolId, SymbolOrigin};
use crate::slab::{RefSlab, RelationSlab, SymbolSlab};

/// Everything one translation unit contributed, as three independent batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFacts {
    pub symbols: SymbolSlab,
    pub refs: RefSlab,
    pub relations: RelationSlab,
}

/// The merged index handed to a serializer once aggregation is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFile {
    pub symbols: SymbolSlab,
    pub refs: RefSlab,
    pub relations: RelationSlab,
}

/// Summary counts for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub symbols: usize,
    pub symbols_with_definition: usize,
    pub merged_symbols: usize,
    pub referenced_symbols: usize,
    pub refs: usize,
    pub relations: usize,
}

impl IndexFile {
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            symbols: self.symbols.len(),
            symbols_with_definition: self.symbols.iter().filter(|s| s.has_definition()).count(),
            merged_symbols: self
                .symbols
                .iter()
                .filter(|s| s.origin.contains(SymbolOrigin::MERGE))
                .count(),
            referenced_symbols: self.refs.len(),
            refs: self.refs.num_refs(),
            relations: self.relations.len(),
        }
    }

    /// Symbols whose bare or qualified name equals `name`.
    pub fn find_by_name<'a, 'q>(&'a self, name: &'q str) -> impl Iterator<Item = &'a Symbol> + 'q
    where
        'a: 'q,
    {
        self.symbols.iter().filter(move |s| s.name == name || s.qualified_name() == name)
    }

    /// Look a symbol up by hex id, falling back to a name search.
    pub fn lookup(&self, query: &str) -> Vec<&Symbol> {
        if let Ok(id) = query.parse::<SymbolId>() {
            if let Some(symbol) = self.symbols.find(&id) {
                return vec![symbol];
            }
        }
        self.find_by_name(query).collect()
    }
}
