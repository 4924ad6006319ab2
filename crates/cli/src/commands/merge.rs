use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;
use xref_core::config::IndexerConfig;
use xref_core::index::IndexStats;
use xref_core::services::{
    discover_units, FactsFileAnalyzer, IndexRunner, TranslationUnit, UnitFailure,
};

use crate::resolve_project_root;

pub const DEFAULT_OUTPUT: &str = "index.json";

#[derive(Args, Debug, Clone, Default)]
pub struct MergeArgs {
    /// Facts files (.json/.yaml/.yml), one per translation unit.
    pub units: Vec<PathBuf>,

    /// Directory to scan for facts files, in addition to any listed explicitly.
    #[arg(long)]
    pub units_dir: Option<PathBuf>,

    /// Absolute path or URI prefix of project-owned sources. Defaults to the current directory.
    #[arg(long)]
    pub project_root: Option<String>,

    /// Number of worker threads. Defaults to one per core.
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Destination of the merged index (JSON). Defaults to `index.json`.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional JSON/YAML config supplying defaults for the options above.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Exit non-zero if any translation unit failed to index.
    #[arg(long, default_value_t = false)]
    pub fail_on_unit_error: bool,
}

#[derive(Debug, Serialize)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub project_root: String,
    pub units: usize,
    pub units_indexed: usize,
    pub failures: Vec<UnitFailure>,
    pub stats: IndexStats,
}

/// Merge per-unit facts files into one index and write it as JSON.
pub fn merge_command(args: &MergeArgs) -> Result<MergeSummary> {
    let config = match &args.config {
        Some(path) => IndexerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => IndexerConfig::default(),
    };

    let project_root =
        resolve_project_root(args.project_root.as_deref().or(config.project_root.as_deref()))?;
    let jobs = args.jobs.or(config.jobs);
    if jobs == Some(0) {
        bail!("--jobs must be at least 1");
    }
    let output = args
        .out
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let mut units: Vec<TranslationUnit> = args.units.iter().map(TranslationUnit::from_path).collect();
    if let Some(dir) = args.units_dir.as_ref().or(config.units_dir.as_ref()) {
        units.extend(discover_units(dir)?);
    }
    if units.is_empty() {
        bail!("No translation units given; pass facts files or --units-dir");
    }

    let runner = IndexRunner { analyzer: &FactsFileAnalyzer, project_root: project_root.clone(), jobs };
    let outcome = runner.run(&units).context("Failed to run indexing")?;

    let body = if args.compact {
        serde_json::to_string(&outcome.index)
    } else {
        serde_json::to_string_pretty(&outcome.index)
    }
    .context("Failed to serialize index to JSON")?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
    }
    fs::write(&output, body)
        .with_context(|| format!("Failed to write index to {}", output.display()))?;
    info!(output = %output.display(), "wrote index");

    let summary = MergeSummary {
        output,
        project_root: project_root.to_string(),
        units: units.len(),
        units_indexed: outcome.units_indexed,
        stats: outcome.index.stats(),
        failures: outcome.failures,
    };

    println!("Merged index:");
    println!("  Project root: {}", summary.project_root);
    println!("  Units: {} indexed / {} given", summary.units_indexed, summary.units);
    println!(
        "  Symbols: {} ({} merged, {} defined)",
        summary.stats.symbols, summary.stats.merged_symbols, summary.stats.symbols_with_definition
    );
    println!("  Refs: {} across {} symbols", summary.stats.refs, summary.stats.referenced_symbols);
    println!("  Relations: {}", summary.stats.relations);
    println!("  Output: {}", summary.output.display());
    if !summary.failures.is_empty() {
        println!("Failed units ({}):", summary.failures.len());
        for failure in &summary.failures {
            println!("  - {}: {}", failure.unit, failure.error);
        }
    }

    if args.fail_on_unit_error && !summary.failures.is_empty() {
        bail!("{} translation unit(s) failed to index", summary.failures.len());
    }
    Ok(summary)
}
