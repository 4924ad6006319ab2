use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use xref_core::index::IndexFile;
use xref_core::model::{Symbol, SymbolLocation};

/// Load a merged index previously written by `merge`.
pub fn load_index(path: &Path) -> Result<IndexFile> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index at {}", path.display()))?;
    serde_json::from_str(&body).context("Failed to parse index JSON")
}

/// Print index statistics, or the records matching `symbol` (hex id or name).
pub fn inspect_command(index_path: &Path, symbol: Option<&str>, json: bool) -> Result<()> {
    let index = load_index(index_path)?;

    let Some(query) = symbol else {
        let stats = index.stats();
        if json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!("Index: {}", index_path.display());
            println!("  Symbols: {}", stats.symbols);
            println!("  Defined: {}", stats.symbols_with_definition);
            println!("  Merged: {}", stats.merged_symbols);
            println!("  Refs: {} across {} symbols", stats.refs, stats.referenced_symbols);
            println!("  Relations: {}", stats.relations);
        }
        return Ok(());
    };

    let matches = index.lookup(query);
    if matches.is_empty() {
        bail!("No symbol matching '{}' in {}", query, index_path.display());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }
    for sym in matches {
        print_symbol(&index, sym);
    }
    Ok(())
}

fn print_symbol(index: &IndexFile, sym: &Symbol) {
    let location = |loc: &Option<SymbolLocation>| {
        loc.as_ref().map(|l| l.file_uri.clone()).unwrap_or_else(|| "-".to_string())
    };
    println!("{} [{}] id={}", sym.qualified_name(), sym.kind.as_str(), sym.id);
    println!("  Declaration: {}", location(&sym.canonical_declaration));
    println!("  Definition: {}", location(&sym.definition));
    println!("  References: {}", sym.references);
    if !sym.signature.is_empty() {
        println!("  Signature: {}", sym.signature);
    }
    if !sym.documentation.is_empty() {
        println!("  Documentation: {}", sym.documentation);
    }
    for include in &sym.include_headers {
        println!("  Include: {} ({})", include.header, include.references);
    }
    println!("  Origin: {:?}", sym.origin);
    if let Some(refs) = index.refs.find(&sym.id) {
        println!("  Ref sites: {}", refs.len());
    }
}
