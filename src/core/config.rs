//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::artifact::Artifact;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "brand-tokens.yaml";

/// Default output directory, relative to the project root
pub const DEFAULT_OUT_DIR: &str = "dist/tokens";

/// Generator configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory, relative to the project root
    pub out_dir: Option<PathBuf>,

    /// Artifacts to emit
    pub artifacts: Option<Vec<Artifact>>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load(project_root: &Path) -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (applied by the accessors)

        // 2. Global user config (~/.config/brand-tokens/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read(&global_path) {
                config.merge(global);
            }
        }

        // 3. Project config (brand-tokens.yaml)
        if let Some(project) = Self::read(&project_root.join(PROJECT_CONFIG_FILE)) {
            config.merge(project);
        }

        config
    }

    fn read(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str::<Config>(&contents).ok()
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "brand-tokens")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.out_dir.is_some() {
            self.out_dir = other.out_dir;
        }
        if other.artifacts.is_some() {
            self.artifacts = other.artifacts;
        }
    }

    /// Resolve the output directory against the project root
    pub fn out_dir(&self, project_root: &Path) -> PathBuf {
        let dir = self
            .out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
        project_root.join(dir)
    }

    /// Artifacts to emit, in write order, without duplicates
    pub fn artifacts(&self) -> Vec<Artifact> {
        match &self.artifacts {
            Some(selected) if !selected.is_empty() => Artifact::ALL
                .into_iter()
                .filter(|a| selected.contains(a))
                .collect(),
            _ => Artifact::ALL.to_vec(),
        }
    }
}
