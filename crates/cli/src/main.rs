use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use xref_merge::commands::{inspect_command, merge_command, MergeArgs};

/// Cross-unit symbol index merger.
///
/// This CLI is a thin wrapper around `xref-core`. All substantive logic lives
/// in the library so it can be tested thoroughly and reused from other
/// frontends.
#[derive(Parser, Debug)]
#[command(
    name = "xref-merge",
    version,
    about = "Merge per-translation-unit symbol facts into one index",
    long_about = None
)]
struct Cli {
    /// Log debug events to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge facts files (one per translation unit) into one deduplicated index.
    Merge(MergeArgs),

    /// Show statistics of a merged index, or the record(s) for one symbol.
    Inspect {
        /// Path to an index written by `merge`.
        #[arg(long, default_value = "index.json")]
        index: PathBuf,

        /// Symbol to show, by hex id, name, or qualified name.
        #[arg(long)]
        symbol: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    xref_merge::init_tracing(cli.verbose);

    match cli.command {
        Command::Merge(args) => {
            merge_command(&args)?;
        }
        Command::Inspect { index, symbol, json } => {
            inspect_command(&index, symbol.as_deref(), json)?
        }
    }

    Ok(())
}
