//! Conflict resolution between partial views of the same symbol.
//!
//! `policy` ranks candidate locations (present > absent, hand-written >
//! generated, in-project > out-of-project); `symbol` folds two records of one
//! id into a single record using that ranking plus fixed backfill rules.

pub mod policy;
pub mod symbol;

pub use policy::{
    deciding_rule, is_generated, prefer, PreferenceRule, ProjectRoot, CODEGEN_SUFFIXES,
    PREFERENCE_RULES,
};
pub use symbol::merge_symbol;
