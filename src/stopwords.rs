use std::{fmt::Display, fs, path::Path};

use fnv::FnvHashSet;
use log::debug;
use once_cell::sync::Lazy;

use crate::{InternalString, StopwordsError, StopwordsErrorKind, StopwordsResult, lexer::is_separator_char};

/// The built-in AP/APA stopword list.
pub const DEFAULT_STOPWORDS: &[&str] = &[
  "a", "an", "and", "at", "but", "by", "for", "in", "nor",
  "of", "on", "or", "so", "the", "to", "up", "yet",
];

static DEFAULTS: Lazy<Stopwords> = Lazy::new(|| Stopwords::new(DEFAULT_STOPWORDS));

/// An ordered set of words that stay lowercase inside a title.
///
/// Entries are stored in lowercase; membership tests expect an already-lowercased word.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
  words: Vec<InternalString>,
  lookup: FnvHashSet<InternalString>,
}

impl Stopwords {
  /// Creates a stopword set from `words`, keeping their order.
  pub fn new<I, S>(words: I) -> Self
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
  {
    let mut set = Self::default();
    for word in words {
      set.insert(word.as_ref());
    }
    set
  }

  /// Creates a set with no stopwords, which disables lowercasing entirely.
  #[inline]
  pub fn empty() -> Self {
    Self::default()
  }

  /// Gets the shared built-in stopword set.
  #[inline]
  pub fn defaults() -> &'static Stopwords {
    &DEFAULTS
  }

  fn insert(&mut self, word: &str) {
    let word = InternalString::from(word.to_lowercase());
    if self.lookup.insert(word.clone()) {
      self.words.push(word);
    }
  }

  /// Returns `true` if the lowercase word `word` is a stopword.
  #[inline]
  pub fn contains(&self, word: &str) -> bool {
    self.lookup.contains(word)
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.words.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Iterates the stopwords in the order they were added.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(|w| w.as_str())
  }

  /// Parses a stopword list.
  ///
  /// The list holds one word per line. Surrounding whitespace is trimmed, and blank lines
  /// and lines starting with `#` are skipped.
  pub fn parse(text: &str) -> StopwordsResult<Self> {
    let mut set = Self::default();
    for (index, line) in text.lines().enumerate() {
      let word = line.trim();
      if word.is_empty() || word.starts_with('#') {
        continue
      }

      if word.chars().any(is_separator_char) {
        return Err(StopwordsErrorKind::InvalidEntry {
          line: index + 1,
          word: word.into(),
        }.into())
      }

      set.insert(word);
    }
    Ok(set)
  }

  /// Reads and parses the stopword list file at `path`.
  pub fn load<P: AsRef<Path>>(path: P) -> StopwordsResult<Self> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
      .map_err(|err| StopwordsError::from(StopwordsErrorKind::Io(err)).with_path(path))?;
    let set = Self::parse(&text).map_err(|err| err.with_path(path))?;
    debug!("loaded {} stopwords from {}", set.len(), path.display());
    Ok(set)
  }
}

impl<S: AsRef<str>> FromIterator<S> for Stopwords {
  fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
    Self::new(iter)
  }
}

impl Display for Stopwords {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (i, word) in self.iter().enumerate() {
      if i > 0 {
        write!(f, " ")?;
      }
      write!(f, "{}", word)?;
    }
    Ok(())
  }
}
