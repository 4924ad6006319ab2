//! Fact data model shared by analyzers, the merge engine, and serializers.
//!
//! - `SymbolId`: stable cross-unit identity
//! - `SymbolLocation`: source URI plus optional byte range
//! - `Symbol`: one (partial) record of a declaration
//! - `Ref`: an occurrence of a symbol with its role
//! - `Relation`: a directed edge between two symbols

mod id;
mod location;
mod refs;
mod relation;
mod symbol;

pub use id::{SymbolId, SymbolIdError, SYMBOL_ID_LEN};
pub use location::{known, ByteRange, SymbolLocation};
pub use refs::{Ref, RefKind};
pub use relation::{Relation, RelationKind};
pub use symbol::{IncludeHeader, Symbol, SymbolFlags, SymbolKind, SymbolOrigin};
