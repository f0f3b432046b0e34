//! `brand-tokens build` command - write the token files

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::Workspace;
use crate::cli::GlobalOpts;
use crate::core::{Generator, TokenTree};

#[derive(clap::Args, Debug, Default)]
pub struct BuildArgs {
    /// Output directory, relative to the project root (default: dist/tokens)
    #[arg(long, short = 'o')]
    pub out_dir: Option<PathBuf>,
}

pub fn run(args: BuildArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::load(global)?;
    let out_dir = workspace.out_dir(args.out_dir.as_deref());
    let generator = Generator::new(TokenTree::brand())?;

    generator.write_all(&out_dir, &workspace.artifacts(), |artifact, _| {
        if !global.quiet {
            println!("{} Generated {}", style("✓").green(), artifact);
        }
    })?;

    if !global.quiet {
        println!();
        println!("Token generation complete!");
    }

    Ok(())
}
