//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    build::BuildArgs, check::CheckArgs, completions::CompletionsArgs, print::PrintArgs,
    query::QueryCommands,
};

#[derive(Parser)]
#[command(name = "brand-tokens")]
#[command(author, version, about = "GivingTuesday design token generator")]
#[command(long_about = "Generates the brand design tokens as an ES module, a CommonJS module and a JSON file. Run without a subcommand to build.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Project root (default: auto-detect by finding package.json or brand-tokens.yaml)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate tokens.js, tokens.cjs and tokens.json (default)
    Build(BuildArgs),

    /// Verify the generated files are up to date without writing
    Check(CheckArgs),

    /// Print one artifact to stdout
    Print(PrintArgs),

    /// Look up tokens and evaluate brand rules
    #[command(subcommand)]
    Query(QueryCommands),

    /// List token categories
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
