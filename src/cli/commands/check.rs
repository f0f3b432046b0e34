//! `brand-tokens check` command - verify generated files are current

use console::style;
use miette::{Diagnostic, Result};
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::helpers::{display_path, Workspace};
use crate::cli::GlobalOpts;
use crate::core::{ArtifactStatus, Generator, TokenTree};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Output directory, relative to the project root (default: dist/tokens)
    #[arg(long, short = 'o')]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Error, Diagnostic)]
#[error("{count} token file(s) out of date in {dir}")]
#[diagnostic(
    code(brand_tokens::check::stale),
    help("run `brand-tokens build` to regenerate them")
)]
pub struct StaleArtifacts {
    count: usize,
    dir: String,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::load(global)?;
    let out_dir = workspace.out_dir(args.out_dir.as_deref());
    let generator = Generator::new(TokenTree::brand())?;

    let report = generator.check(&out_dir, &workspace.artifacts())?;

    let mut outdated = 0;
    for (artifact, status) in &report {
        let marker = match status {
            ArtifactStatus::UpToDate => style("✓ up to date").green(),
            ArtifactStatus::Stale => style("✗ stale").red(),
            ArtifactStatus::Missing => style("✗ missing").red(),
        };
        if *status != ArtifactStatus::UpToDate {
            outdated += 1;
        }
        if !global.quiet {
            println!("{:<12} {}", artifact.file_name(), marker);
        }
    }

    if outdated > 0 {
        return Err(StaleArtifacts {
            count: outdated,
            dir: display_path(&out_dir, workspace.project.root()),
        }
        .into());
    }

    Ok(())
}
