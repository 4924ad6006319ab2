use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::model::{Relation, RelationKind, SymbolId};

/// Accumulates relations; identical triples collapse on insert.
#[derive(Debug, Default)]
pub struct RelationSlabBuilder {
    relations: HashSet<Relation>,
}

impl RelationSlabBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relation: Relation) {
        self.relations.insert(relation);
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn build(self) -> RelationSlab {
        let mut relations: Vec<Relation> = self.relations.into_iter().collect();
        relations.sort();
        RelationSlab { relations }
    }
}

/// Immutable relations sorted by `(subject, predicate, object)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Relation>")]
pub struct RelationSlab {
    relations: Vec<Relation>,
}

impl RelationSlab {
    pub fn builder() -> RelationSlabBuilder {
        RelationSlabBuilder::new()
    }

    /// All relations with the given subject and predicate.
    pub fn lookup(&self, subject: &SymbolId, predicate: RelationKind) -> &[Relation] {
        let key = (*subject, predicate);
        let start = self.relations.partition_point(|r| (r.subject, r.predicate) < key);
        let end = self.relations.partition_point(|r| (r.subject, r.predicate) <= key);
        &self.relations[start..end]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relation> {
        self.relations.iter()
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

impl FromIterator<Relation> for RelationSlab {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        let mut builder = RelationSlabBuilder::new();
        for relation in iter {
            builder.insert(relation);
        }
        builder.build()
    }
}

impl From<Vec<Relation>> for RelationSlab {
    fn from(relations: Vec<Relation>) -> Self {
        relations.into_iter().collect()
    }
}

impl IntoIterator for RelationSlab {
    type Item = Relation;
    type IntoIter = std::vec::IntoIter<Relation>;

    fn into_iter(self) -> Self::IntoIter {
        self.relations.into_iter()
    }
}

impl Serialize for RelationSlab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.relations)
    }
}
