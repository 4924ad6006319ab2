use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::model::{Ref, SymbolId};

/// Accumulates `(symbol id, ref)` pairs; identical pairs collapse on insert.
#[derive(Debug, Default)]
pub struct RefSlabBuilder {
    entries: HashSet<(SymbolId, Ref)>,
}

impl RefSlabBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SymbolId, reference: Ref) {
        self.entries.insert((id, reference));
    }

    /// Number of distinct `(id, ref)` pairs so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> RefSlab {
        let mut entries: Vec<(SymbolId, Ref)> = self.entries.into_iter().collect();
        entries.sort();
        let num_refs = entries.len();

        let mut groups: Vec<RefGroup> = Vec::new();
        for (id, reference) in entries {
            match groups.last_mut() {
                Some(group) if group.symbol == id => group.refs.push(reference),
                _ => groups.push(RefGroup { symbol: id, refs: vec![reference] }),
            }
        }
        RefSlab { groups, num_refs }
    }
}

/// All refs of one symbol, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefGroup {
    pub symbol: SymbolId,
    pub refs: Vec<Ref>,
}

/// Immutable refs grouped by symbol id, both levels sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<RefGroup>")]
pub struct RefSlab {
    groups: Vec<RefGroup>,
    num_refs: usize,
}

impl RefSlab {
    pub fn builder() -> RefSlabBuilder {
        RefSlabBuilder::new()
    }

    /// Refs recorded for `id`, if any.
    pub fn find(&self, id: &SymbolId) -> Option<&[Ref]> {
        self.groups
            .binary_search_by(|g| g.symbol.cmp(id))
            .ok()
            .map(|idx| self.groups[idx].refs.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RefGroup> {
        self.groups.iter()
    }

    /// Number of symbols with at least one ref.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of refs across all symbols.
    pub fn num_refs(&self) -> usize {
        self.num_refs
    }
}

impl FromIterator<(SymbolId, Ref)> for RefSlab {
    fn from_iter<I: IntoIterator<Item = (SymbolId, Ref)>>(iter: I) -> Self {
        let mut builder = RefSlabBuilder::new();
        for (id, reference) in iter {
            builder.insert(id, reference);
        }
        builder.build()
    }
}

impl From<Vec<RefGroup>> for RefSlab {
    fn from(groups: Vec<RefGroup>) -> Self {
        groups
            .into_iter()
            .flat_map(|group| {
                let id = group.symbol;
                group.refs.into_iter().map(move |reference| (id, reference))
            })
            .collect()
    }
}

impl IntoIterator for RefSlab {
    type Item = (SymbolId, Ref);
    type IntoIter = std::vec::IntoIter<(SymbolId, Ref)>;

    fn into_iter(self) -> Self::IntoIter {
        let mut flat = Vec::with_capacity(self.num_refs);
        for group in self.groups {
            let id = group.symbol;
            flat.extend(group.refs.into_iter().map(|reference| (id, reference)));
        }
        flat.into_iter()
    }
}

impl Serialize for RefSlab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.groups)
    }
}
