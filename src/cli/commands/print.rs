//! `brand-tokens print` command - render one artifact to stdout

use miette::{IntoDiagnostic, Result};
use std::io::Write;

use crate::core::{Artifact, Generator, TokenTree};

#[derive(clap::Args, Debug)]
pub struct PrintArgs {
    /// Artifact to render
    #[arg(value_enum)]
    pub artifact: Artifact,
}

pub fn run(args: PrintArgs) -> Result<()> {
    let generator = Generator::new(TokenTree::brand())?;
    let content = generator.render(args.artifact)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes()).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;
    Ok(())
}
