//! Aggregation services: the concurrent coordinator, the worker-pool driver
//! that feeds it, and the facts-file analyzer.

pub mod aggregator;
pub mod driver;
pub mod facts;

pub use aggregator::Aggregator;
pub use driver::{
    AnalyzeError, DriverError, IndexRunner, RunOutcome, TranslationUnit, UnitAnalyzer, UnitFailure,
};
pub use facts::{discover_units, FactsFile, FactsFileAnalyzer, RefFact};
