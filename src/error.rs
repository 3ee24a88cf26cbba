//! Error types for attr-l10n.

use thiserror::Error;

/// Result type for attr-l10n operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by strict parsing, index-based rendering and the CLI.
///
/// The lenient parse and resolution paths never produce these; malformed
/// content there degrades into fewer ranked entries instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The encoding had an odd number of tokens; the last one has no language tag.
    #[error("Dangling token without a language tag: {0}")]
    DanglingToken(String),

    /// A language tag could not be parsed as a BCP-47 identifier.
    #[error("Invalid language tag {tag:?}: {reason}")]
    InvalidLanguageTag { tag: String, reason: String },

    /// A display-language index outside the supplied language list.
    #[error("Unknown display language index: {0}")]
    UnknownDisplayLanguage(usize),

    /// Error occurred during I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
