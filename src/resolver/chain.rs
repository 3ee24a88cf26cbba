use crate::core::{LocaleSuffix, LocalizedText};
use std::fmt;

/// Fallback order of suffixes for one display language.
///
/// Locale-matched entries come first, best match first. The last entry is
/// always the default (declared or synthesized) and has an empty suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityChain {
    entries: Vec<LocaleSuffix>,
}

impl PriorityChain {
    /// Builds a chain from ranked entries, appending `default` as the last entry.
    pub(crate) fn new(mut ranked: Vec<LocaleSuffix>, default: LocaleSuffix) -> Self {
        debug_assert!(default.is_default());
        ranked.push(default);
        Self { entries: ranked }
    }

    pub fn entries(&self) -> &[LocaleSuffix] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocaleSuffix> {
        self.entries.iter()
    }

    /// Always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The final fallback entry.
    pub fn default_entry(&self) -> &LocaleSuffix {
        // Chains are built with a trailing default and never mutated.
        &self.entries[self.entries.len() - 1]
    }

    /// The locale-matched entries preceding the default.
    pub fn ranked(&self) -> &[LocaleSuffix] {
        &self.entries[..self.entries.len() - 1]
    }

    /// Picks the first variant of `attribute` that `lookup` reports as present.
    ///
    /// `lookup` receives full attribute names (`attribute` plus suffix) in
    /// chain order. The returned text carries the locale of the entry that
    /// supplied it.
    pub fn select<'v, F>(&self, attribute: &str, mut lookup: F) -> Option<LocalizedText>
    where
        F: FnMut(&str) -> Option<&'v str>,
    {
        self.entries.iter().find_map(|entry| {
            lookup(&entry.attribute_name(attribute))
                .map(|text| LocalizedText::new(text, entry.locale().cloned()))
        })
    }
}

impl<'a> IntoIterator for &'a PriorityChain {
    type Item = &'a LocaleSuffix;
    type IntoIter = std::slice::Iter<'a, LocaleSuffix>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for PriorityChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
