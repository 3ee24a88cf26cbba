use super::PriorityChain;
use crate::localization::DisplayLanguages;

/// One priority chain per display language, positioned like the language list
/// it was built from.
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    languages: DisplayLanguages,
    chains: Vec<PriorityChain>,
}

impl PriorityTable {
    pub(crate) fn new(languages: DisplayLanguages, chains: Vec<PriorityChain>) -> Self {
        debug_assert_eq!(languages.len(), chains.len());
        Self { languages, chains }
    }

    /// Chain for the display language at `index`.
    pub fn chain(&self, index: usize) -> Option<&PriorityChain> {
        self.chains.get(index)
    }

    /// Chain for a display-language code from the list the table was built with.
    pub fn chain_for(&self, code: &str) -> Option<&PriorityChain> {
        self.languages
            .index_of(code)
            .and_then(|index| self.chain(index))
    }

    pub fn languages(&self) -> &DisplayLanguages {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// `(code, chain)` pairs in display-language order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PriorityChain)> {
        self.languages.iter().zip(self.chains.iter())
    }
}
