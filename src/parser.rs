//! Parser for the compact localizations encoding.
//!
//! The encoding is a whitespace-separated sequence of `key tag` pairs, for
//! example `default: en-US _fr: fr-CA _es: es-MX`. A key is either the marker
//! `default` or an attribute suffix; colons in keys are dropped. The `default`
//! key describes the unsuffixed attribute and is stored with an empty suffix.

use crate::core::locale::{parse_locale, try_parse_locale};
use crate::core::{LocaleSuffix, SuffixTable, DEFAULT_KEY};
use crate::{Error, Result};
use std::str::FromStr;

/// Parses an encoding, degrading on malformed content instead of failing.
///
/// An absent encoding yields an empty table. A trailing key without a tag is
/// dropped, and a tag that cannot be resolved is kept as an unknown locale.
pub fn parse(encoding: Option<&str>) -> SuffixTable {
    let Some(encoding) = encoding else {
        return SuffixTable::default();
    };

    let (pairs, dangling) = split_pairs(encoding);
    if let Some(token) = dangling {
        tracing::warn!(token, "dropping localization key without a language tag");
    }

    let entries = pairs
        .into_iter()
        .map(|(key, tag)| {
            let locale = parse_locale(tag);
            if locale.is_none() {
                tracing::debug!(key, tag, "unresolvable language tag, locale left unknown");
            }
            LocaleSuffix::new(suffix_name(key), locale)
        })
        .collect();

    SuffixTable::new(entries)
}

/// Parses an encoding, rejecting dangling keys and unresolvable tags.
pub fn parse_strict(encoding: &str) -> Result<SuffixTable> {
    let (pairs, dangling) = split_pairs(encoding);
    if let Some(token) = dangling {
        return Err(Error::DanglingToken(token.to_string()));
    }

    let entries = pairs
        .into_iter()
        .map(|(key, tag)| -> Result<LocaleSuffix> {
            let locale = try_parse_locale(tag)?;
            Ok(LocaleSuffix::new(suffix_name(key), Some(locale)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SuffixTable::new(entries))
}

impl FromStr for SuffixTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_strict(s)
    }
}

/// Splits the encoding into `(key, tag)` pairs plus any unpaired trailing token.
fn split_pairs(encoding: &str) -> (Vec<(&str, &str)>, Option<&str>) {
    let mut pairs = Vec::new();
    let mut tokens = encoding.split_whitespace();
    while let Some(key) = tokens.next() {
        match tokens.next() {
            Some(tag) => pairs.push((key, tag)),
            None => return (pairs, Some(key)),
        }
    }
    (pairs, None)
}

fn suffix_name(key: &str) -> String {
    let stripped = key.replace(':', "");
    let name = stripped.trim();
    if name == DEFAULT_KEY {
        String::new()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(table: &SuffixTable) -> Vec<(String, String)> {
        table
            .iter()
            .map(|e| (e.suffix().to_string(), e.language_tag()))
            .collect()
    }

    #[test]
    fn test_parse_reference_encoding() {
        let table = parse(Some("default: en-US _fr: fr-CA _es: es-MX"));
        assert_eq!(
            pairs(&table),
            vec![
                ("".to_string(), "en-US".to_string()),
                ("_fr".to_string(), "fr-CA".to_string()),
                ("_es".to_string(), "es-MX".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_absent_encoding_is_empty() {
        assert!(parse(None).is_empty());
        assert!(parse(Some("")).is_empty());
        assert!(parse(Some("   \t ")).is_empty());
    }

    #[test]
    fn test_parse_drops_dangling_token() {
        let table = parse(Some("default: en-US _fr:"));
        assert_eq!(pairs(&table), vec![("".to_string(), "en-US".to_string())]);
    }

    #[test]
    fn test_parse_keeps_unresolvable_tag_as_unknown() {
        let table = parse(Some("_xx: !!bogus!! _fr: fr"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].suffix(), "_xx");
        assert!(table.entries()[0].locale().is_none());
        assert_eq!(table.entries()[1].language_tag(), "fr");
    }

    #[test]
    fn test_parse_strips_every_colon() {
        let table = parse(Some("_f:r: fr default en"));
        assert_eq!(table.entries()[0].suffix(), "_fr");
        assert!(table.entries()[1].is_default());
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let table = parse(Some("default: en _fr: fr default: de _fr: fr-CA"));
        assert_eq!(
            table.iter().map(LocaleSuffix::suffix).collect::<Vec<_>>(),
            vec!["", "_fr", "", "_fr"]
        );
    }

    #[test]
    fn test_parse_splits_on_any_whitespace() {
        let table = parse(Some("default:\ten-US\n  _fr:   fr-CA"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_strict_rejects_dangling_token() {
        match parse_strict("default: en-US _fr:") {
            Err(Error::DanglingToken(token)) => assert_eq!(token, "_fr:"),
            other => panic!("expected DanglingToken, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_strict_rejects_bad_tag() {
        let result = "default: en-US _xx: !!bogus!!".parse::<SuffixTable>();
        assert!(matches!(result, Err(Error::InvalidLanguageTag { .. })));
    }

    #[test]
    fn test_parse_strict_agrees_with_lenient_on_clean_input() {
        let encoding = "default: en-US _fr: fr-CA _es: es-MX";
        let strict = parse_strict(encoding).expect("clean encoding should parse");
        assert_eq!(strict, parse(Some(encoding)));
    }
}
