//! Fact slabs and their builders.
//!
//! Each fact kind has a mutable `*Builder` that accepts an unbounded number of
//! inserts and deduplicates by key, and an immutable `*Slab` produced only by
//! `build(self)`. A slab has no mutating methods; once a builder is consumed
//! nothing can be added to the facts it held.

mod refs;
mod relations;
mod symbols;

pub use refs::{RefGroup, RefSlab, RefSlabBuilder};
pub use relations::{RelationSlab, RelationSlabBuilder};
pub use symbols::{SymbolSlab, SymbolSlabBuilder};
