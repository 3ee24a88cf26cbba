//! Display languages and the strategies that rank candidate locales for them.

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

/// Ordered list of the languages a page can be displayed in.
///
/// Priority tables are indexed by position in this list, so callers keep
/// using the same instance (or an equal one) for lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayLanguages {
    codes: Vec<String>,
}

impl DisplayLanguages {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma- or whitespace-separated list such as `"en, fr de"`.
    pub fn parse_list(list: &str) -> Self {
        Self::new(
            list.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|code| !code.is_empty()),
        )
    }

    pub fn code(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }

    /// Position of `code` in the list, compared ASCII case-insensitively.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.codes
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

/// Strategy for ranking candidate locales against one display-language range.
pub trait MatchStrategy: Send + Sync {
    /// Returns the members of `available` that match `range`, best match first.
    ///
    /// `available` holds distinct, determined locales.
    fn rank<'a>(
        &self,
        range: &LanguageIdentifier,
        available: &'a [LanguageIdentifier],
    ) -> Vec<&'a LanguageIdentifier>;
}

/// Language-range filtering: `fr` matches `fr`, `fr-CA`, `fr-Latn-FR`, but
/// `fr-CA` does not match `fr` or `fr-FR`.
///
/// Matches keep the order of the candidate list.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeFilter;

impl MatchStrategy for RangeFilter {
    fn rank<'a>(
        &self,
        range: &LanguageIdentifier,
        available: &'a [LanguageIdentifier],
    ) -> Vec<&'a LanguageIdentifier> {
        available
            .iter()
            .filter(|candidate| range.matches(*candidate, true, false))
            .collect()
    }
}

/// Negotiated filtering via `fluent-langneg`.
///
/// On top of range filtering this also accepts candidates that only agree
/// after likely-subtag expansion or differ in region, e.g. `en-US` matching
/// `en-GB`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Negotiated;

impl MatchStrategy for Negotiated {
    fn rank<'a>(
        &self,
        range: &LanguageIdentifier,
        available: &'a [LanguageIdentifier],
    ) -> Vec<&'a LanguageIdentifier> {
        negotiate_languages(
            std::slice::from_ref(range),
            available,
            None,
            NegotiationStrategy::Filtering,
        )
    }
}
