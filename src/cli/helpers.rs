//! Shared helper functions for CLI commands
//!
//! Project and configuration resolution used by the commands that touch the
//! output directory.

use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::core::{Artifact, Config, Project};

/// Resolved project root plus the settings layered on top of it
pub struct Workspace {
    pub project: Project,
    pub config: Config,
}

impl Workspace {
    /// Locate the project and load its configuration
    pub fn load(global: &GlobalOpts) -> Result<Self> {
        let project = match &global.project {
            Some(path) => Project::open(path).into_diagnostic()?,
            None => Project::discover().into_diagnostic()?,
        };
        let config = Config::load(project.root());
        Ok(Self { project, config })
    }

    /// Output directory, with a command-line override taking precedence
    pub fn out_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        match override_dir {
            Some(dir) => self.project.root().join(dir),
            None => self.config.out_dir(self.project.root()),
        }
    }

    pub fn artifacts(&self) -> Vec<Artifact> {
        self.config.artifacts()
    }
}

/// Format a path relative to `root` when it lives underneath it
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
