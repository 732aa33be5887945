//! Help text rendering.
//!
//! Help is advisory: a need's outcome never depends on whether its help
//! could be rendered. Callers fall back to [`RENDER_FAILED_NOTICE`] when a
//! [`HelpRenderer`] returns an error.

pub mod markdown;

pub use markdown::MarkdownRenderer;

use crate::error::Result;

/// Markdown shown for needs that declare no help.
pub const NO_HELP: &str = "_Sorry, no help._";

/// Plain text shown when help cannot be rendered.
pub const RENDER_FAILED_NOTICE: &str = "    <Failed to render help. Is it valid Markdown?>";

/// Turns help Markdown into text for the terminal.
pub trait HelpRenderer {
    /// Render `markdown` into display text.
    fn render(&self, markdown: &str) -> Result<String>;
}

/// Renderer that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl HelpRenderer for PlainRenderer {
    fn render(&self, markdown: &str) -> Result<String> {
        Ok(markdown.to_string())
    }
}
