//! Run configuration for an indexing job.
//!
//! Loaded from a JSON or YAML file (by extension); every field is optional so
//! frontends can layer command-line overrides on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::merge::ProjectRoot;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config at {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Unsupported config format: {0} (expected .json, .yaml, or .yml)")]
    UnsupportedFormat(PathBuf),
    #[error("'jobs' must be at least 1")]
    ZeroJobs,
    #[error("Project root must be absolute, got '{0}'")]
    RelativeProjectRoot(String),
}

/// Serializable settings for one indexing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Absolute path or URI prefix of project-owned sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<String>,
    /// Worker threads for unit analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    /// Where the merged index is written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Directory scanned for per-unit facts files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_dir: Option<PathBuf>,
}

impl IndexerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let parse_err = |message: String| ConfigError::Parse { path: path.to_path_buf(), message };
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&body).map_err(|e| parse_err(e.to_string()))?,
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&body).map_err(|e| parse_err(e.to_string()))?
            }
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jobs == Some(0) {
            return Err(ConfigError::ZeroJobs);
        }
        if let Some(root) = &self.project_root {
            if !is_absolute_root(root) {
                return Err(ConfigError::RelativeProjectRoot(root.clone()));
            }
        }
        Ok(())
    }

    pub fn project_root(&self) -> Option<ProjectRoot> {
        self.project_root.as_deref().map(ProjectRoot::new)
    }
}

/// An absolute filesystem path or a URI with a scheme.
pub fn is_absolute_root(root: &str) -> bool {
    root.contains("://") || Path::new(root).is_absolute()
}
