//! Project root discovery

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::PROJECT_CONFIG_FILE;

/// Files whose presence marks a project root
const ROOT_MARKERS: [&str; 2] = [PROJECT_CONFIG_FILE, "package.json"];

/// The package the tokens are generated for
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (outputs are resolved against it)
    root: PathBuf,
}

impl Project {
    /// Find the project root by walking up from the current directory
    pub fn discover() -> Result<Self, ProjectError> {
        let current = std::env::current_dir().map_err(|e| ProjectError::IoError(e.to_string()))?;
        Ok(Self::discover_from(&current))
    }

    /// Find the nearest ancestor of `start` holding a root marker.
    ///
    /// Falls back to `start` itself when no ancestor has one.
    pub fn discover_from(start: &Path) -> Self {
        let start = start
            .canonicalize()
            .unwrap_or_else(|_| start.to_path_buf());

        let mut current = start.clone();
        loop {
            if ROOT_MARKERS.iter().any(|marker| current.join(marker).is_file()) {
                return Self { root: current };
            }
            if !current.pop() {
                return Self { root: start };
            }
        }
    }

    /// Use an explicit directory as the project root
    pub fn open(path: &Path) -> Result<Self, ProjectError> {
        if !path.is_dir() {
            return Err(ProjectError::NotFound(path.to_path_buf()));
        }
        let root = path
            .canonicalize()
            .map_err(|e| ProjectError::IoError(e.to_string()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Errors that can occur while locating the project
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("project directory {0:?} does not exist")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}
