use std::{error::Error, fmt::Display, io, path::PathBuf};

use crate::InternalString;

/// Type alias for `Result<T, StopwordsError>`
pub type StopwordsResult<T> = Result<T, StopwordsError>;

/// An error raised while reading a stopword list.
#[derive(Debug)]
pub struct StopwordsError {
  /// What went wrong.
  pub kind: StopwordsErrorKind,
  /// The list file being read, if the list came from a file.
  pub path: Option<PathBuf>,
}

/// Provides the categories of stopword list errors.
#[derive(Debug)]
pub enum StopwordsErrorKind {
  /// The list file could not be read.
  Io(io::Error),
  /// An entry contains a separator character and can never match a word.
  InvalidEntry {
    /// 1-based line number of the entry.
    line: usize,
    word: InternalString,
  },
}

impl StopwordsError {
  pub(crate) fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.path = Some(path.into());
    self
  }
}

impl From<StopwordsErrorKind> for StopwordsError {
  fn from(kind: StopwordsErrorKind) -> Self {
    Self {
      kind,
      path: None,
    }
  }
}

impl Error for StopwordsError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match &self.kind {
      StopwordsErrorKind::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl Display for StopwordsError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if let Some(path) = &self.path {
      write!(f, "{}: ", path.display())?;
    }
    write!(f, "{}", self.kind)
  }
}

impl Display for StopwordsErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(err) => write!(f, "failed to read stopword list: {}", err),
      Self::InvalidEntry { line, word } => write!(f, "line {}: stopword '{}' contains a separator character", line, word),
    }
  }
}
