use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;
use url::Url;
use xref_core::merge::ProjectRoot;

pub mod commands;

/// Canonicalize the given path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // Try to canonicalize; if it fails (e.g., path does not yet exist),
        // join it with the current dir to get an absolute path.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Resolve the project root used by the location preference policy.
///
/// Anything that already has a scheme (`file:///src/proj`) is used verbatim;
/// a filesystem path (default: the current directory) becomes a `file://` URI.
pub fn resolve_project_root(root: Option<&str>) -> Result<ProjectRoot> {
    match root {
        Some(uri) if uri.contains("://") => Ok(ProjectRoot::new(uri)),
        other => {
            let path = canonicalize_or_current(other.unwrap_or("."))?;
            let uri = Url::from_file_path(&path)
                .map_err(|_| anyhow!("Project root is not an absolute path: {}", path.display()))?;
            Ok(ProjectRoot::new(uri.as_str()))
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "xref_core=debug,xref_merge=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
