use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::SymbolLocation;

bitflags::bitflags! {
    /// Role of one occurrence of a symbol.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RefKind: u8 {
        const DECLARATION = 1 << 0;
        const DEFINITION = 1 << 1;
        const REFERENCE = 1 << 2;
        const CALL = 1 << 3;
        const WRITE = 1 << 4;
        /// The symbol's name is spelled out at this location (not implicit).
        const SPELLED = 1 << 5;
    }
}

/// One occurrence of a symbol. The owning symbol id is held by the slab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ref {
    pub location: SymbolLocation,
    pub kind: RefKind,
}

impl Ref {
    pub fn new(location: SymbolLocation, kind: RefKind) -> Self {
        Self { location, kind }
    }
}

impl Ord for Ref {
    fn cmp(&self, other: &Self) -> Ordering {
        self.location.cmp(&other.location).then(self.kind.bits().cmp(&other.kind.bits()))
    }
}

impl PartialOrd for Ref {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
