//! Core module - token tree, configuration and file generation

pub mod artifact;
pub mod config;
pub mod generator;
pub mod project;
pub mod tokens;

pub use artifact::Artifact;
pub use config::Config;
pub use generator::{ArtifactStatus, GenerateError, Generator};
pub use project::{Project, ProjectError};
pub use tokens::TokenTree;
