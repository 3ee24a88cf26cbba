//! Expands a suffix table into per-language priority chains.

mod chain;
mod table;

pub use self::chain::PriorityChain;
pub use self::table::PriorityTable;

use crate::core::locale::{is_undetermined, parse_range};
use crate::core::{LocaleSuffix, SuffixTable};
use crate::localization::{DisplayLanguages, MatchStrategy, RangeFilter};
use crate::parser;
use unic_langid::LanguageIdentifier;

/// Builds priority chains with a pluggable locale-matching strategy.
pub struct Resolver {
    strategy: Box<dyn MatchStrategy>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::with_strategy(RangeFilter)
    }
}

impl Resolver {
    /// Creates a resolver using language-range filtering.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy<S: MatchStrategy + 'static>(strategy: S) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Orders the suffixes of `table` for one display language.
    ///
    /// Every entry whose locale matches is included, so a locale listed twice
    /// contributes two entries at the same rank, in table order. The chain
    /// always ends with the declared default (the last one, if repeated) or a
    /// synthesized unknown-locale default.
    pub fn build_chain(&self, language_code: &str, table: &SuffixTable) -> PriorityChain {
        let mut default_entry = None;
        let mut candidates = Vec::new();
        for entry in table {
            if entry.is_default() {
                default_entry = Some(entry);
            } else {
                candidates.push(entry);
            }
        }

        let mut ranked = Vec::new();
        if !candidates.is_empty() {
            if let Some(range) = parse_range(language_code) {
                let available = distinct_locales(&candidates);
                for matched in self.strategy.rank(&range, &available) {
                    ranked.extend(
                        candidates
                            .iter()
                            .filter(|candidate| candidate.locale() == Some(matched))
                            .map(|candidate| (*candidate).clone()),
                    );
                }
            } else {
                tracing::debug!(language_code, "display language is not a usable range");
            }
        }

        tracing::debug!(
            language_code,
            matched = ranked.len(),
            declared_default = default_entry.is_some(),
            "built priority chain"
        );

        let default_entry = default_entry
            .cloned()
            .unwrap_or_else(LocaleSuffix::unknown_default);
        PriorityChain::new(ranked, default_entry)
    }

    /// Builds one chain per display language, in list order.
    pub fn build_priority_table(
        &self,
        languages: &DisplayLanguages,
        table: &SuffixTable,
    ) -> PriorityTable {
        let chains = languages
            .iter()
            .map(|code| self.build_chain(code, table))
            .collect();
        PriorityTable::new(languages.clone(), chains)
    }
}

/// Known, determined locales of `candidates`, first occurrence order.
fn distinct_locales(candidates: &[&LocaleSuffix]) -> Vec<LanguageIdentifier> {
    let mut locales: Vec<LanguageIdentifier> = Vec::new();
    for locale in candidates.iter().filter_map(|candidate| candidate.locale()) {
        if !is_undetermined(locale) && !locales.contains(locale) {
            locales.push(locale.clone());
        }
    }
    locales
}

/// [`Resolver::build_chain`] with language-range filtering.
pub fn build_chain(language_code: &str, table: &SuffixTable) -> PriorityChain {
    Resolver::new().build_chain(language_code, table)
}

/// [`Resolver::build_priority_table`] with language-range filtering.
pub fn build_priority_table(languages: &DisplayLanguages, table: &SuffixTable) -> PriorityTable {
    Resolver::new().build_priority_table(languages, table)
}

/// Parses an encoding leniently and resolves it for every display language.
pub fn parse_localizations(languages: &DisplayLanguages, encoding: Option<&str>) -> PriorityTable {
    build_priority_table(languages, &parser::parse(encoding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Negotiated;
    use pretty_assertions::assert_eq;

    const REFERENCE: &str = "default: en-US _fr: fr-CA _es: es-MX";

    fn summary(chain: &PriorityChain) -> Vec<(String, String)> {
        chain
            .iter()
            .map(|e| (e.suffix().to_string(), e.language_tag()))
            .collect()
    }

    fn pair(suffix: &str, tag: &str) -> (String, String) {
        (suffix.to_string(), tag.to_string())
    }

    #[test]
    fn test_chain_prefers_matching_suffix() {
        let chain = build_chain("fr", &parser::parse(Some(REFERENCE)));
        assert_eq!(summary(&chain), vec![pair("_fr", "fr-CA"), pair("", "en-US")]);
    }

    #[test]
    fn test_chain_without_match_is_default_only() {
        let chain = build_chain("de", &parser::parse(Some(REFERENCE)));
        assert_eq!(summary(&chain), vec![pair("", "en-US")]);
    }

    #[test]
    fn test_default_only_table() {
        let chain = build_chain("en", &parser::parse(Some("default: en-US")));
        assert_eq!(summary(&chain), vec![pair("", "en-US")]);
    }

    #[test]
    fn test_missing_default_is_synthesized() {
        let chain = build_chain("fr", &parser::parse(Some("_fr: fr-CA")));
        assert_eq!(summary(&chain), vec![pair("_fr", "fr-CA"), pair("", "")]);
        assert!(chain.default_entry().locale().is_none());
    }

    #[test]
    fn test_empty_table_yields_synthesized_default() {
        let chain = build_chain("en", &SuffixTable::default());
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.default_entry(), &LocaleSuffix::unknown_default());
    }

    #[test]
    fn test_last_declared_default_wins() {
        let chain = build_chain("de", &parser::parse(Some("default: en _fr: fr default: de")));
        assert_eq!(summary(&chain), vec![pair("", "de")]);
    }

    #[test]
    fn test_repeated_locale_contributes_every_entry() {
        let table = parser::parse(Some("_a: fr-CA _es: es _b: fr-CA default: en"));
        let chain = build_chain("fr", &table);
        assert_eq!(
            summary(&chain),
            vec![pair("_a", "fr-CA"), pair("_b", "fr-CA"), pair("", "en")]
        );
    }

    #[test]
    fn test_matches_keep_table_order() {
        let table = parser::parse(Some("_ca: fr-CA _fr: fr default: en"));
        let chain = build_chain("fr", &table);
        assert_eq!(
            summary(&chain),
            vec![pair("_ca", "fr-CA"), pair("_fr", "fr"), pair("", "en")]
        );

        let table = parser::parse(Some("_fr: fr _ca: fr-CA default: en"));
        let chain = build_chain("fr", &table);
        assert_eq!(
            summary(&chain),
            vec![pair("_fr", "fr"), pair("_ca", "fr-CA"), pair("", "en")]
        );
    }

    #[test]
    fn test_unknown_and_undetermined_locales_never_rank() {
        let table = parser::parse(Some("_x: !!bogus!! _u: und _fr: fr default: en"));
        for code in ["fr", "en", "und", "de"] {
            let chain = build_chain(code, &table);
            assert!(
                chain.ranked().iter().all(|e| e.suffix() == "_fr"),
                "unexpected ranked entries for {code}: {chain}"
            );
        }
    }

    #[test]
    fn test_unparseable_display_language_matches_nothing() {
        let chain = build_chain("@@", &parser::parse(Some(REFERENCE)));
        assert_eq!(summary(&chain), vec![pair("", "en-US")]);
    }

    #[test]
    fn test_priority_table_follows_language_order() {
        let languages = DisplayLanguages::new(["en", "fr", "es", "de"]);
        let table = parse_localizations(&languages, Some(REFERENCE));

        assert_eq!(table.languages(), &languages);
        assert_eq!(table.len(), 4);
        assert_eq!(summary(table.chain(0).unwrap()), vec![pair("", "en-US")]);
        assert_eq!(
            summary(table.chain(1).unwrap()),
            vec![pair("_fr", "fr-CA"), pair("", "en-US")]
        );
        assert_eq!(
            summary(table.chain_for("es").unwrap()),
            vec![pair("_es", "es-MX"), pair("", "en-US")]
        );
        assert!(table.chain(4).is_none());
    }

    #[test]
    fn test_absent_encoding_gives_default_everywhere() {
        let languages = DisplayLanguages::new(["en", "fr"]);
        let table = parse_localizations(&languages, None);
        for (_, chain) in table.iter() {
            assert_eq!(chain.entries(), &[LocaleSuffix::unknown_default()]);
        }
    }

    #[test]
    fn test_negotiated_strategy_accepts_sibling_region() {
        let table = parser::parse(Some("default: fr _gb: en-GB"));
        let ranged = build_chain("en-US", &table);
        let negotiated = Resolver::with_strategy(Negotiated).build_chain("en-US", &table);

        assert_eq!(summary(&ranged), vec![pair("", "fr")]);
        assert_eq!(summary(&negotiated), vec![pair("_gb", "en-GB"), pair("", "fr")]);
    }
}
