//! # apcase
//!
//! Converts short text to AP/APA-style title case.
//!
//! Major words are capitalized, while stopwords such as "of" and "the" stay lowercase
//! unless they open or close the title. Whitespace runs are collapsed to a single space
//! by default; the punctuation that separates words (hyphens, dashes, commas, colons,
//! semicolons, `!`, `?`, parentheses and `/`) is kept as-is.
//!
//! ```
//! use apcase::{title_case, TitleCaseOptions, Stopwords};
//!
//! assert_eq!("A Tale of Two Cities", title_case(Some("a tale of two cities"), None));
//!
//! let options = TitleCaseOptions::new().stopwords(Stopwords::empty());
//! assert_eq!("A Tale Of Two", title_case(Some("a tale of two"), Some(&options)));
//! ```

mod caser;
mod error;
mod stopwords;
pub mod format;
pub mod lexer;

pub use crate::caser::*;
pub use crate::error::*;
pub use crate::stopwords::*;
pub use crate::lexer::split;

/// The apcase version according to the crate metadata.
pub const APCASE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) type InternalString = smartstring::alias::CompactString;
