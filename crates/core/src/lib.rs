//! xref-core
//!
//! Merges symbol, reference, and relation facts reported independently by
//! many translation units into one deduplicated cross-unit index.
//!
//! - `model`: fact types (symbols, locations, refs, relations)
//! - `slab`: deduplicating builders and the immutable slabs they freeze into
//! - `merge`: location preference policy and the symbol merge function
//! - `services`: the concurrent aggregator, worker-pool driver, facts-file analyzer
//! - `config`: serializable run configuration
//! - `index`: per-unit fact bundles and the finalized index
//!
//! Frontends (the CLI) stay thin; everything testable lives here.

pub mod config;
pub mod index;
pub mod merge;
pub mod model;
pub mod services;
pub mod slab;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
