//! brand-tokens: GivingTuesday design token generator
//!
//! Materializes the brand token tree into an ES module, a CommonJS module
//! and a JSON file that front-end packages import directly.

pub mod cli;
pub mod core;
pub mod render;
