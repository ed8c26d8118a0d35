use crate::lexer::Separator;

/// Controls how whitespace separators are written to the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WhitespaceMode {
  /// Normalizes every whitespace run to a single ASCII space character (0x20).
  Collapse,
  /// Prints whitespace runs verbatim.
  Keep,
}

impl WhitespaceMode {
  #[inline]
  pub fn from_keep_spaces(keep_spaces: bool) -> Self {
    if keep_spaces { Self::Keep } else { Self::Collapse }
  }

  /// Writes `sep` to `output` according to this mode.
  ///
  /// Punctuation separators are always written unchanged.
  #[inline]
  pub fn write_separator(&self, sep: &Separator, output: &mut String) {
    if *self == Self::Collapse && sep.is_whitespace() {
      output.push(' ');
    } else {
      output.push_str(sep.as_str());
    }
  }
}

impl Default for WhitespaceMode {
  fn default() -> Self {
    Self::Collapse
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write(mode: WhitespaceMode, sep: Separator) -> String {
    let mut output = String::new();
    mode.write_separator(&sep, &mut output);
    output
  }

  #[test]
  fn collapse_whitespace() {
    assert_eq!(" ", write(WhitespaceMode::Collapse, Separator::Whitespace("\t \n")));
    assert_eq!("\t \n", write(WhitespaceMode::Keep, Separator::Whitespace("\t \n")));
  }

  #[test]
  fn punctuation_untouched() {
    assert_eq!("—", write(WhitespaceMode::Collapse, Separator::Punctuation("—")));
    assert_eq!("/", write(WhitespaceMode::Keep, Separator::Punctuation("/")));
  }
}
