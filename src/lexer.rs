use logos::*;
use smallvec::SmallVec;

/// Buffer type returned by [`split`].
pub type Segments<'a> = SmallVec<[Segment<'a>; 16]>;

/// Raw tokens recognized by the title splitter.
#[derive(Logos, Debug, PartialEq)]
pub enum SplitToken {
  #[error]
  Error,
  /// Any run of characters that is neither whitespace nor splitter punctuation.
  #[regex(r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}\-‑–—,:;!?()/]+")]
  Word,
  #[regex(r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+")]
  Whitespace,
  #[regex(r"[\-‑–—,:;!?()/]")]
  Punctuation,
}

/// A separator matched by the splitter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Separator<'a> {
  /// A maximal run of whitespace characters.
  Whitespace(&'a str),
  /// A single punctuation character.
  Punctuation(&'a str),
}

impl<'a> Separator<'a> {
  /// Gets the separator text exactly as it appeared in the input.
  #[inline]
  pub fn as_str(&self) -> &'a str {
    match self {
      Self::Whitespace(s) | Self::Punctuation(s) => s,
    }
  }

  #[inline]
  pub fn is_whitespace(&self) -> bool {
    matches!(self, Self::Whitespace(_))
  }
}

/// One element of a split title.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
  /// Text between two separators. May be empty.
  Content(&'a str),
  Separator(Separator<'a>),
}

impl<'a> Segment<'a> {
  #[inline]
  pub fn as_str(&self) -> &'a str {
    match self {
      Self::Content(s) => s,
      Self::Separator(sep) => sep.as_str(),
    }
  }
}

/// Returns `true` if `c` is matched by the splitter as a separator character.
pub fn is_separator_char(c: char) -> bool {
  matches!(c,
    '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' '
    | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{2028}' | '\u{2029}'
    | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    | '-' | '‑' | '–' | '—' | ',' | ':' | ';' | '!' | '?' | '(' | ')' | '/'
  )
}

/// Splits `src` into alternating content and separator segments.
///
/// Separators are kept in the output. Content segments occupy the even indices
/// and separators the odd ones, so the result always has an odd length. A
/// leading or trailing separator produces an empty content segment at that end,
/// and two adjacent separators have an empty content segment between them.
pub fn split(src: &str) -> Segments<'_> {
  let mut segments = Segments::new();
  let mut content_start = 0;
  let mut lexer = SplitToken::lexer(src);

  while let Some(token) = lexer.next() {
    let sep = match token {
      SplitToken::Whitespace => Separator::Whitespace(lexer.slice()),
      SplitToken::Punctuation => Separator::Punctuation(lexer.slice()),
      SplitToken::Word | SplitToken::Error => continue,
    };
    let span = lexer.span();
    segments.push(Segment::Content(&src[content_start..span.start]));
    segments.push(Segment::Separator(sep));
    content_start = span.end;
  }

  segments.push(Segment::Content(&src[content_start..]));
  segments
}
