use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::model::{Symbol, SymbolId};

/// Mutable, insert-only accumulator of symbols keyed by id.
#[derive(Debug, Default)]
pub struct SymbolSlabBuilder {
    symbols: HashMap<SymbolId, Symbol>,
}

impl SymbolSlabBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `symbol`, replacing any record with the same id.
    pub fn insert(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.id, symbol);
    }

    /// Insert `symbol`, or replace the existing record with `merge(existing, symbol)`.
    ///
    /// Returns `true` when a record with the same id was already present.
    pub fn insert_or_merge<F>(&mut self, symbol: Symbol, merge: F) -> bool
    where
        F: FnOnce(&Symbol, &Symbol) -> Symbol,
    {
        match self.symbols.entry(symbol.id) {
            Entry::Occupied(mut slot) => {
                let merged = merge(slot.get(), &symbol);
                slot.insert(merged);
                true
            }
            Entry::Vacant(slot) => {
                slot.insert(symbol);
                false
            }
        }
    }

    pub fn find(&self, id: &SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Freeze into an id-sorted slab. The builder is consumed.
    pub fn build(self) -> SymbolSlab {
        let mut symbols: Vec<Symbol> = self.symbols.into_values().collect();
        symbols.sort_by(|a, b| a.id.cmp(&b.id));
        SymbolSlab { symbols }
    }
}

/// Immutable, id-sorted set of symbols with at most one record per id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Symbol>")]
pub struct SymbolSlab {
    symbols: Vec<Symbol>,
}

impl SymbolSlab {
    pub fn builder() -> SymbolSlabBuilder {
        SymbolSlabBuilder::new()
    }

    pub fn find(&self, id: &SymbolId) -> Option<&Symbol> {
        self.symbols.binary_search_by(|s| s.id.cmp(id)).ok().map(|idx| &self.symbols[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<Symbol> for SymbolSlab {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut builder = SymbolSlabBuilder::new();
        for symbol in iter {
            builder.insert(symbol);
        }
        builder.build()
    }
}

impl From<Vec<Symbol>> for SymbolSlab {
    fn from(symbols: Vec<Symbol>) -> Self {
        symbols.into_iter().collect()
    }
}

impl IntoIterator for SymbolSlab {
    type Item = Symbol;
    type IntoIter = std::vec::IntoIter<Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolSlab {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl Serialize for SymbolSlab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.symbols)
    }
}
