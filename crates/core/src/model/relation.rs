use serde::{Deserialize, Serialize};

use super::SymbolId;

/// Kind of directed edge between two symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    BaseOf,
    OverriddenBy,
    Overrides,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::BaseOf => "base_of",
            RelationKind::OverriddenBy => "overridden_by",
            RelationKind::Overrides => "overrides",
        }
    }
}

/// `subject --predicate--> object`, deduplicated by the whole triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub subject: SymbolId,
    pub predicate: RelationKind,
    pub object: SymbolId,
}

impl Relation {
    pub fn new(subject: SymbolId, predicate: RelationKind, object: SymbolId) -> Self {
        Self { subject, predicate, object }
    }
}
