//! `brand-tokens list` command - summarize token categories

use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::core::TokenTree;

pub fn run() -> Result<()> {
    println!("{}", category_table(&TokenTree::brand()));
    Ok(())
}

/// Markdown table of top-level categories and their token counts
pub fn category_table(tokens: &TokenTree) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Tokens"]);
    for (name, count) in tokens.category_sizes() {
        builder.push_record([name.to_string(), count.to_string()]);
    }
    builder.build().with(Style::markdown()).to_string()
}
