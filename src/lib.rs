//! # attr-l10n
//!
//! Resolves which localized variant of a suffixed attribute to show for a
//! display language, and renders the chosen text as language-tagged HTML.
//!
//! A localizations encoding such as `default: en-US _fr: fr-CA _es: es-MX`
//! says that `title` holds American English text, `title_fr` Canadian French
//! and `title_es` Mexican Spanish. For every display language this crate
//! builds a priority chain of suffixes, best match first and the default
//! attribute last.
//!
//! ## Example
//!
//! ```
//! use attr_l10n::{parse_localizations, DisplayLanguages};
//!
//! let languages = DisplayLanguages::new(["en-US", "fr"]);
//! let table = parse_localizations(&languages, Some("default: en-US _fr: fr-CA"));
//!
//! let chain = table.chain_for("fr").unwrap();
//! let text = chain
//!     .select("title", |name| match name {
//!         "title_fr" => Some("Bonjour"),
//!         "title" => Some("Hello"),
//!         _ => None,
//!     })
//!     .unwrap();
//!
//! assert_eq!(text.html_tag("fr"), "<span lang=\"fr-CA\">Bonjour</span>");
//! ```

pub mod core;
pub mod error;
pub mod localization;
pub mod parser;
pub mod render;
pub mod resolver;

pub use crate::core::{LocaleSuffix, LocalizedText, SuffixTable};
pub use error::{Error, Result};
pub use localization::{DisplayLanguages, MatchStrategy, Negotiated, RangeFilter};
pub use parser::{parse, parse_strict};
pub use render::{render, HtmlRenderer, Renderer};
pub use resolver::{
    build_chain, build_priority_table, parse_localizations, PriorityChain, PriorityTable,
    Resolver,
};

/// Options for rendering localized text as HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Element used to carry the `lang` attribute.
    pub tag_name: String,
    /// Wrap lines longer than this many characters; `None` or `0` disables wrapping.
    pub max_line_length: Option<usize>,
    /// Inserted after each line break added by wrapping.
    pub line_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tag_name: "span".to_string(),
            max_line_length: None,
            line_prefix: String::new(),
        }
    }
}
