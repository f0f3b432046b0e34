//! Generated artifact kinds

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the generated token files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Artifact {
    /// ES module with named exports (tokens.js)
    Js,
    /// CommonJS module (tokens.cjs)
    Cjs,
    /// Plain JSON data (tokens.json)
    Json,
}

impl Artifact {
    /// All artifacts, in the order they are written
    pub const ALL: [Artifact; 3] = [Artifact::Js, Artifact::Cjs, Artifact::Json];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Js => "tokens.js",
            Artifact::Cjs => "tokens.cjs",
            Artifact::Json => "tokens.json",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
