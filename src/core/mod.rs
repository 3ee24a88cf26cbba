//! Value types shared by the parser, resolver and renderer.

pub mod locale;
mod suffix;
mod text;

pub use suffix::{LocaleSuffix, SuffixTable, DEFAULT_KEY};
pub use text::LocalizedText;
