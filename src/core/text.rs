use super::locale;
use unic_langid::LanguageIdentifier;

/// A piece of text together with the locale it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    text: String,
    locale: Option<LanguageIdentifier>,
}

impl LocalizedText {
    pub fn new(text: impl Into<String>, locale: Option<LanguageIdentifier>) -> Self {
        Self {
            text: text.into(),
            locale,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The locale of the text, `None` when not known.
    pub fn locale(&self) -> Option<&LanguageIdentifier> {
        self.locale.as_ref()
    }

    pub fn language_tag(&self) -> String {
        locale::language_tag(self.locale())
    }
}
