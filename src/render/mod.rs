mod escape;
mod html;
mod wrap;

use crate::core::LocalizedText;

pub use escape::{escape_html_text, newlines_to_br};
pub use html::{render, HtmlRenderer};
pub use wrap::wrap_at_space;

/// Turns localized text into display markup for a page in a given language.
pub trait Renderer {
    fn render(&self, text: &LocalizedText, page_language_code: &str) -> String;
}
