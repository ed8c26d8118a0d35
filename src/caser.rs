use log::trace;

use crate::format::{WhitespaceMode, write_capitalized};
use crate::lexer::{Segment, split};
use crate::Stopwords;

/// Per-call configuration for [`title_case`].
///
/// Each field falls back to its default independently when left as `None`.
#[derive(Debug, Clone, Default)]
pub struct TitleCaseOptions {
  /// Keep whitespace runs verbatim instead of collapsing them to one space. Defaults to `false`.
  pub keep_spaces: Option<bool>,
  /// Replacement stopword list. Defaults to [`Stopwords::defaults`].
  ///
  /// An empty list disables stopword lowercasing.
  pub stopwords: Option<Stopwords>,
}

impl TitleCaseOptions {
  pub fn new() -> Self {
    Default::default()
  }

  pub fn keep_spaces(mut self, keep_spaces: bool) -> Self {
    self.keep_spaces = Some(keep_spaces);
    self
  }

  pub fn stopwords(mut self, stopwords: Stopwords) -> Self {
    self.stopwords = Some(stopwords);
    self
  }
}

/// Converts text to AP/APA title case.
///
/// A `TitleCaser` built with [`TitleCaser::new`] uses the built-in stopwords and
/// collapses whitespace.
#[derive(Debug, Clone, Default)]
pub struct TitleCaser {
  whitespace: WhitespaceMode,
  stopwords: Option<Stopwords>,
}

impl TitleCaser {
  pub fn new() -> Self {
    Default::default()
  }

  /// Builds a caser from `options`, applying defaults for any unset field.
  pub fn with_options(options: &TitleCaseOptions) -> Self {
    Self {
      whitespace: WhitespaceMode::from_keep_spaces(options.keep_spaces.unwrap_or(false)),
      stopwords: options.stopwords.clone(),
    }
  }

  pub fn keep_spaces(mut self, keep_spaces: bool) -> Self {
    self.whitespace = WhitespaceMode::from_keep_spaces(keep_spaces);
    self
  }

  pub fn stopwords(mut self, stopwords: Stopwords) -> Self {
    self.stopwords = Some(stopwords);
    self
  }

  #[inline]
  pub fn whitespace_mode(&self) -> WhitespaceMode {
    self.whitespace
  }

  /// Gets the stopword set in effect.
  #[inline]
  pub fn effective_stopwords(&self) -> &Stopwords {
    self.stopwords.as_ref().unwrap_or(Stopwords::defaults())
  }

  /// Puts `value` into title case.
  ///
  /// Content segments are capitalized unless they are a stopword that sits at
  /// neither end of the split sequence. The ends are the first and last
  /// *segments*, so a title that starts or ends with a separator has an empty
  /// segment there and its first or last word can still come out lowercase.
  pub fn apply(&self, value: &str) -> String {
    if value.is_empty() {
      return String::new()
    }

    let stopwords = self.effective_stopwords();
    let segments = split(value);
    let last = segments.len() - 1;
    let mut output = String::with_capacity(value.len());

    for (index, segment) in segments.iter().enumerate() {
      match segment {
        Segment::Separator(sep) => self.whitespace.write_separator(sep, &mut output),
        Segment::Content(word) => {
          let lower = word.to_lowercase();
          if index != 0 && index != last && stopwords.contains(&lower) {
            trace!("segment {}: keeping stopword '{}' lowercase", index, lower);
            output.push_str(&lower);
          } else {
            write_capitalized(word, &mut output);
          }
        }
      }
    }

    output
  }
}

impl From<&TitleCaseOptions> for TitleCaser {
  fn from(options: &TitleCaseOptions) -> Self {
    Self::with_options(options)
  }
}

/// Converts `value` to AP/APA title case.
///
/// Returns an empty string when `value` is `None` or empty.
pub fn title_case(value: Option<&str>, options: Option<&TitleCaseOptions>) -> String {
  let value = match value {
    Some(value) if !value.is_empty() => value,
    _ => return String::new(),
  };

  match options {
    Some(options) => TitleCaser::with_options(options).apply(value),
    None => TitleCaser::new().apply(value),
  }
}
