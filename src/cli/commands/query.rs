//! `brand-tokens query` command - token lookups and brand rule checks
//!
//! Mirrors the helper functions shipped in the generated modules, so a
//! value can be checked from the shell without loading JavaScript.

use clap::Subcommand;
use miette::{Diagnostic, Result};
use thiserror::Error;

use crate::core::TokenTree;

#[derive(Subcommand, Debug)]
pub enum QueryCommands {
    /// Look up a color in colors, semantic, then theme
    Color {
        /// Color name (e.g. red, accent, warning)
        name: String,
    },

    /// Look up a spacing step
    Spacing {
        /// Spacing key (e.g. 4, base)
        key: String,
    },

    /// Look up a font size
    FontSize {
        /// Font size key (e.g. h1, base, 2xl)
        key: String,
    },

    /// Check whether two colors may be combined
    Combo {
        color1: String,
        color2: String,
    },

    /// Check whether a color may be used for text
    TextSafe {
        color: String,
    },
}

#[derive(Debug, Error, Diagnostic)]
#[error("no {kind} token named '{key}'")]
#[diagnostic(code(brand_tokens::query::not_found))]
pub struct TokenNotFound {
    kind: &'static str,
    key: String,
}

pub fn run(cmd: QueryCommands) -> Result<()> {
    let tokens = TokenTree::brand();
    println!("{}", evaluate(&tokens, &cmd)?);
    Ok(())
}

/// Answer a query against the token tree
pub fn evaluate(tokens: &TokenTree, cmd: &QueryCommands) -> Result<String, TokenNotFound> {
    let lookup = |kind: &'static str, key: &str, value: Option<&str>| {
        value.map(str::to_string).ok_or_else(|| TokenNotFound {
            kind,
            key: key.to_string(),
        })
    };

    match cmd {
        QueryCommands::Color { name } => lookup("color", name, tokens.get_color(name)),
        QueryCommands::Spacing { key } => lookup("spacing", key, tokens.get_spacing(key)),
        QueryCommands::FontSize { key } => lookup("font size", key, tokens.get_font_size(key)),
        QueryCommands::Combo { color1, color2 } => {
            Ok(tokens.is_valid_color_combo(color1, color2).to_string())
        }
        QueryCommands::TextSafe { color } => Ok(tokens.is_typography_safe(color).to_string()),
    }
}
