//! Helpers for the optional BCP-47 locale carried by suffixes and text.
//!
//! `None` stands for an unknown or unset locale. Its tag string is empty.

use crate::{Error, Result};
use unic_langid::LanguageIdentifier;

/// Tag written in place of an unknown locale when re-encoding a table.
pub const UNDETERMINED: &str = "und";

/// Parses a language tag, mapping anything unresolvable to `None`.
pub fn parse_locale(tag: &str) -> Option<LanguageIdentifier> {
    tag.trim().parse().ok()
}

/// Parses a language tag, reporting why it could not be resolved.
pub fn try_parse_locale(tag: &str) -> Result<LanguageIdentifier> {
    tag.trim()
        .parse::<LanguageIdentifier>()
        .map_err(|e| Error::InvalidLanguageTag {
            tag: tag.to_string(),
            reason: e.to_string(),
        })
}

/// Returns the canonical tag string of a locale, or `""` when unknown.
pub fn language_tag(locale: Option<&LanguageIdentifier>) -> String {
    locale.map(ToString::to_string).unwrap_or_default()
}

/// True when the primary language subtag is `und`.
///
/// Such identifiers behave as wildcards under range matching, so they are
/// kept out of ranking.
pub fn is_undetermined(locale: &LanguageIdentifier) -> bool {
    locale.language.as_str() == UNDETERMINED
}

/// Parses a display-language code into a matching range.
///
/// Codes that do not parse, or that leave the language undetermined, yield
/// `None` and match no candidate.
pub fn parse_range(code: &str) -> Option<LanguageIdentifier> {
    parse_locale(code).filter(|range| !is_undetermined(range))
}
