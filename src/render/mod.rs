//! Rendering of the token tree into artifact text

pub mod template;

pub use template::{render_data, Renderer, RenderError};
