//! Token file generation - renders artifacts and writes them to disk

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::artifact::Artifact;
use crate::core::tokens::TokenTree;
use crate::render::{RenderError, Renderer};

#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("Failed to create output directory {path}")]
    #[diagnostic(
        code(brand_tokens::generate::create_dir),
        help("check that the parent directory is writable")
    )]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    #[diagnostic(code(brand_tokens::generate::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}")]
    #[diagnostic(code(brand_tokens::generate::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

/// State of a generated file compared with a fresh render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Renders one token tree into any of the artifacts
pub struct Generator {
    tokens: TokenTree,
    renderer: Renderer,
}

impl Generator {
    pub fn new(tokens: TokenTree) -> Result<Self, GenerateError> {
        Ok(Self {
            tokens,
            renderer: Renderer::new()?,
        })
    }

    /// Render one artifact's text
    pub fn render(&self, artifact: Artifact) -> Result<String, GenerateError> {
        Ok(self.renderer.render(artifact, &self.tokens)?)
    }

    /// Write `artifacts` into `out_dir`, creating it if needed.
    ///
    /// Existing files are overwritten. `on_written` is called after each file
    /// lands. The first failure aborts the run.
    pub fn write_all(
        &self,
        out_dir: &Path,
        artifacts: &[Artifact],
        mut on_written: impl FnMut(Artifact, &Path),
    ) -> Result<Vec<PathBuf>, GenerateError> {
        std::fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(artifacts.len());
        for &artifact in artifacts {
            let content = self.render(artifact)?;
            let path = out_dir.join(artifact.file_name());
            std::fs::write(&path, content).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            on_written(artifact, &path);
            written.push(path);
        }

        Ok(written)
    }

    /// Compare each artifact on disk with a fresh render. Writes nothing.
    pub fn check(
        &self,
        out_dir: &Path,
        artifacts: &[Artifact],
    ) -> Result<Vec<(Artifact, ArtifactStatus)>, GenerateError> {
        artifacts
            .iter()
            .map(|&artifact| {
                let path = out_dir.join(artifact.file_name());
                let status = match std::fs::read(&path) {
                    Ok(on_disk) => {
                        if on_disk == self.render(artifact)?.as_bytes() {
                            ArtifactStatus::UpToDate
                        } else {
                            ArtifactStatus::Stale
                        }
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => ArtifactStatus::Missing,
                    Err(source) => return Err(GenerateError::Read { path, source }),
                };
                Ok((artifact, status))
            })
            .collect()
    }
}
