use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::index::{IndexFile, UnitFacts};
use crate::merge::ProjectRoot;
use crate::services::aggregator::Aggregator;

/// One independently analyzed source input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub name: String,
    pub path: PathBuf,
}

impl TranslationUnit {
    /// Unit named after the file name of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Translation unit not found at {0}")]
    MissingUnit(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse facts in {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Unsupported facts file format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Analyzer error: {0}")]
    Analyzer(String),
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Implemented by whatever turns one translation unit into facts (a compiler
/// frontend, a facts-file loader, a test double).
pub trait UnitAnalyzer: Send + Sync {
    fn analyze(&self, unit: &TranslationUnit) -> Result<UnitFacts, AnalyzeError>;
    fn name(&self) -> &'static str;
}

/// A unit whose analysis failed; the rest of the run is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitFailure {
    pub unit: String,
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub index: IndexFile,
    pub units_indexed: usize,
    pub failures: Vec<UnitFailure>,
}

/// Runs an analyzer over many units on a bounded worker pool and merges the
/// results through one [`Aggregator`].
pub struct IndexRunner<'a> {
    pub analyzer: &'a dyn UnitAnalyzer,
    pub project_root: ProjectRoot,
    /// Worker threads; `None` lets rayon pick (one per core).
    pub jobs: Option<usize>,
}

impl IndexRunner<'_> {
    pub fn run(&self, units: &[TranslationUnit]) -> Result<RunOutcome, DriverError> {
        let mut pool = rayon::ThreadPoolBuilder::new();
        if let Some(jobs) = self.jobs {
            pool = pool.num_threads(jobs);
        }
        let pool = pool.build()?;

        info!(
            analyzer = self.analyzer.name(),
            units = units.len(),
            workers = pool.current_num_threads(),
            project_root = %self.project_root,
            "indexing translation units"
        );

        let aggregator = Aggregator::new(self.project_root.clone());
        let failures = Mutex::new(Vec::new());
        let indexed = AtomicUsize::new(0);

        pool.install(|| {
            units.par_iter().for_each(|unit| match self.analyzer.analyze(unit) {
                Ok(facts) => {
                    debug!(
                        unit = %unit.name,
                        symbols = facts.symbols.len(),
                        refs = facts.refs.num_refs(),
                        relations = facts.relations.len(),
                        "analyzed unit"
                    );
                    aggregator.on_unit(facts);
                    indexed.fetch_add(1, Ordering::Relaxed);
                }
                Err(err) => {
                    warn!(unit = %unit.name, error = %err, "unit analysis failed");
                    failures.lock().push(UnitFailure {
                        unit: unit.name.clone(),
                        path: unit.path.clone(),
                        error: err.to_string(),
                    });
                }
            })
        });

        let mut failures = failures.into_inner();
        failures.sort_by(|a, b| a.path.cmp(&b.path));
        let units_indexed = indexed.into_inner();
        info!(units_indexed, failed = failures.len(), "indexing finished");

        Ok(RunOutcome { index: aggregator.finalize(), units_indexed, failures })
    }
}
