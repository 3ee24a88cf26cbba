use super::locale::{self, UNDETERMINED};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Key that marks the unsuffixed attribute in a localizations encoding.
pub const DEFAULT_KEY: &str = "default";

/// Maps an attribute-name suffix to the locale of the text stored under it.
///
/// An empty suffix denotes the unsuffixed (default) attribute. The locale may
/// be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocaleSuffix {
    suffix: String,
    locale: Option<LanguageIdentifier>,
}

impl LocaleSuffix {
    pub fn new(suffix: impl Into<String>, locale: Option<LanguageIdentifier>) -> Self {
        Self {
            suffix: suffix.into(),
            locale,
        }
    }

    /// The synthesized fallback: no suffix, unknown locale.
    pub fn unknown_default() -> Self {
        Self::default()
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn locale(&self) -> Option<&LanguageIdentifier> {
        self.locale.as_ref()
    }

    /// True for the entry describing the unsuffixed attribute.
    pub fn is_default(&self) -> bool {
        self.suffix.is_empty()
    }

    /// Canonical BCP-47 tag of the locale, `""` when unknown.
    pub fn language_tag(&self) -> String {
        locale::language_tag(self.locale())
    }

    /// Full attribute name for this variant of `attribute`.
    pub fn attribute_name(&self, attribute: &str) -> String {
        format!("{}{}", attribute, self.suffix)
    }
}

impl fmt::Display for LocaleSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.is_default() {
            DEFAULT_KEY
        } else {
            self.suffix.as_str()
        };
        match &self.locale {
            Some(locale) => write!(f, "{}: {}", key, locale),
            None => write!(f, "{}: {}", key, UNDETERMINED),
        }
    }
}

/// Ordered suffix entries parsed from one localizations encoding.
///
/// Entries keep their order of appearance. Duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTable {
    entries: Vec<LocaleSuffix>,
}

impl SuffixTable {
    pub fn new(entries: Vec<LocaleSuffix>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LocaleSuffix] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocaleSuffix> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The declared default entry. When several are declared the last one wins.
    pub fn default_entry(&self) -> Option<&LocaleSuffix> {
        self.entries.iter().rev().find(|entry| entry.is_default())
    }

    /// Non-empty suffixes in table order.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_default())
            .map(LocaleSuffix::suffix)
    }
}

impl<'a> IntoIterator for &'a SuffixTable {
    type Item = &'a LocaleSuffix;
    type IntoIter = std::slice::Iter<'a, LocaleSuffix>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Re-encodes the table in the `key: tag` wire format.
impl fmt::Display for SuffixTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::locale::parse_locale;

    fn entry(suffix: &str, tag: &str) -> LocaleSuffix {
        LocaleSuffix::new(suffix, parse_locale(tag))
    }

    #[test]
    fn test_default_entry_last_one_wins() {
        let table = SuffixTable::new(vec![
            entry("", "en-US"),
            entry("_fr", "fr-CA"),
            entry("", "en-GB"),
        ]);
        let default = table.default_entry().expect("default declared");
        assert_eq!(default.language_tag(), "en-GB");
    }

    #[test]
    fn test_suffixes_skip_default() {
        let table = SuffixTable::new(vec![
            entry("", "en-US"),
            entry("_fr", "fr-CA"),
            entry("_es", "es-MX"),
        ]);
        assert_eq!(table.suffixes().collect::<Vec<_>>(), vec!["_fr", "_es"]);
    }

    #[test]
    fn test_display_reencodes_table() {
        let table = SuffixTable::new(vec![
            entry("", "en-US"),
            entry("_fr", "fr-CA"),
            LocaleSuffix::new("_xx", None),
        ]);
        assert_eq!(table.to_string(), "default: en-US _fr: fr-CA _xx: und");
    }

    #[test]
    fn test_attribute_name_appends_suffix() {
        assert_eq!(entry("_fr", "fr").attribute_name("title"), "title_fr");
        assert_eq!(LocaleSuffix::unknown_default().attribute_name("title"), "title");
    }
}
