//! Artifact rendering using Tera

use miette::Diagnostic;
use rust_embed::Embed;
use serde_json::Value;
use tera::Tera;
use thiserror::Error;

use crate::core::artifact::Artifact;
use crate::core::tokens::TokenTree;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const MODULE_TEMPLATE: &str = "module.js.tera";

/// Banner title written at the top of each module file
pub const BANNER_TITLE: &str = "GivingTuesday Design Tokens";

/// Version stamped into the module banner
pub const TOKENS_VERSION: &str = "1.0.0";

/// Helper functions defined in every module file, in emission order
pub const HELPERS: [&str; 5] = [
    "getColor",
    "getSpacing",
    "getFontSize",
    "isValidColorCombo",
    "isTypographySafe",
];

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    #[diagnostic(code(brand_tokens::render::not_found))]
    NotFound(String),

    #[error("Template rendering error: {0}")]
    #[diagnostic(code(brand_tokens::render::template))]
    Template(String),

    #[error("Failed to serialize token tree: {0}")]
    #[diagnostic(code(brand_tokens::render::serialize))]
    Serialize(#[from] serde_json::Error),
}

/// Renders a token tree into artifact text
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a renderer with the embedded templates
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();

        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(filename) {
                let template_str = std::str::from_utf8(&content.data)
                    .map_err(|e| RenderError::Template(format!("{}: {}", filename, e)))?;
                tera.add_raw_template(filename, template_str)
                    .map_err(|e| RenderError::Template(e.to_string()))?;
            }
        }

        if !tera.get_template_names().any(|n| n == MODULE_TEMPLATE) {
            return Err(RenderError::NotFound(MODULE_TEMPLATE.to_string()));
        }

        Ok(Self { tera })
    }

    /// Render one artifact
    pub fn render(&self, artifact: Artifact, tokens: &TokenTree) -> Result<String, RenderError> {
        match artifact {
            Artifact::Js => self.render_module(tokens),
            Artifact::Cjs => self.render_alternate_module(tokens),
            Artifact::Json => render_data(tokens),
        }
    }

    /// ES module with named exports and helpers
    pub fn render_module(&self, tokens: &TokenTree) -> Result<String, RenderError> {
        self.render_linked(tokens, true)
    }

    /// CommonJS module exposing the same bindings through `module.exports`
    pub fn render_alternate_module(&self, tokens: &TokenTree) -> Result<String, RenderError> {
        self.render_linked(tokens, false)
    }

    fn render_linked(&self, tokens: &TokenTree, esm: bool) -> Result<String, RenderError> {
        let value = serde_json::to_value(tokens)?;
        let categories: Vec<&str> = value
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();

        let mut context = tera::Context::new();
        context.insert("title", BANNER_TITLE);
        context.insert("version", TOKENS_VERSION);
        context.insert("esm", &esm);
        context.insert("tokens_json", &serde_json::to_string_pretty(&value)?);
        context.insert("categories", &categories);
        context.insert("helpers", &HELPERS);

        self.tera
            .render(MODULE_TEMPLATE, &context)
            .map_err(|e| RenderError::Template(e.to_string()))
    }
}

/// Pretty-printed JSON of the whole tree, 2-space indent, no wrapper
pub fn render_data(tokens: &TokenTree) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// Extract the token literal bound to `tokens` in a rendered module file
pub fn extract_module_tokens(module: &str) -> Option<Value> {
    let start = module.find("const tokens = ")? + "const tokens = ".len();
    let rest = &module[start..];
    let end = rest.find("\n};")? + "\n}".len();
    serde_json::from_str(&rest[..end]).ok()
}
