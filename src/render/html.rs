use super::escape::{escape_html_text, newlines_to_br};
use super::wrap::wrap_at_space;
use crate::core::LocalizedText;
use crate::localization::DisplayLanguages;
use crate::render::Renderer;
use crate::{Error, RenderOptions, Result};

/// Renders localized text as HTML, adding a `lang`-tagged wrapper element when
/// the text's language differs from the page's.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders for the display language at `index` in `languages`.
    pub fn render_for(
        &self,
        text: &LocalizedText,
        languages: &DisplayLanguages,
        index: usize,
    ) -> Result<String> {
        let page_language_code = languages
            .code(index)
            .ok_or(Error::UnknownDisplayLanguage(index))?;
        Ok(render(text, page_language_code, &self.options))
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, text: &LocalizedText, page_language_code: &str) -> String {
        render(text, page_language_code, &self.options)
    }
}

/// Wraps (optionally), escapes and language-tags `entry` for the page.
///
/// The wrapper is emitted when the entry's tag string, `""` for an unknown
/// locale, is not exactly `page_language_code`.
pub fn render(entry: &LocalizedText, page_language_code: &str, options: &RenderOptions) -> String {
    let text = match options.max_line_length {
        Some(max) if max > 0 => wrap_at_space(entry.text(), max, &options.line_prefix),
        _ => entry.text().to_string(),
    };
    let encoded = newlines_to_br(&escape_html_text(&text));

    let language_tag = entry.language_tag();
    if language_tag == page_language_code {
        encoded
    } else {
        format!(
            "<{tag} lang=\"{lang}\">{body}</{tag}>",
            tag = options.tag_name,
            lang = language_tag,
            body = encoded
        )
    }
}

impl LocalizedText {
    /// Renders with default options: `span` wrapper, no line wrapping.
    pub fn html_tag(&self, page_language_code: &str) -> String {
        render(self, page_language_code, &RenderOptions::default())
    }
}
