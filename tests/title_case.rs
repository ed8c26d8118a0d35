use apcase::*;
use apcase::lexer::{Segment, Separator};

use assert_matches::*;

macro_rules! title {
  ($src:expr) => {
    title_case(Some($src), None)
  };
  ($src:expr, $opts:expr) => {
    title_case(Some($src), Some(&$opts))
  };
}

#[test]
fn empty_input() {
  assert_eq!("", title_case(Some(""), None));
  assert_eq!("", title_case(None, None));
  assert_eq!("", title_case(None, Some(&TitleCaseOptions::new().keep_spaces(true))));
}

#[test]
fn capitalize_every_word() {
  assert_eq!("The Quick Brown Fox", title!("the quick brown fox"));
}

#[test]
fn interior_stopwords_lowercase() {
  assert_eq!("A Tale of Two Cities", title!("a tale of two cities"));
  assert_eq!("Tale of Two", title!("tale OF two"));
}

#[test]
fn first_and_last_stopwords_capitalized() {
  assert_eq!("The End Of", title!("the end of"));
  assert_eq!("A", title!("a"));
}

#[test]
fn custom_stopwords_replace_defaults() {
  let opts = TitleCaseOptions::new().stopwords(Stopwords::new(["x"]));
  assert_eq!("X And Y", title!("x and y", opts));

  let opts = TitleCaseOptions::new().stopwords(Stopwords::new(["OF"]));
  assert_eq!("Tale of Two", title!("tale OF two", opts));
}

#[test]
fn empty_stopwords_disable_lowercasing() {
  let opts = TitleCaseOptions::new().stopwords(Stopwords::empty());
  assert_eq!("A Tale Of Two", title!("a tale of two", opts));
}

#[test]
fn whitespace_collapsed_by_default() {
  assert_eq!("A B", title!("a   b"));
  assert_eq!("A B C", title!("a\tb\nc"));
  assert_eq!("One , Two", title!("one ,  two"));
}

#[test]
fn keep_spaces() {
  let opts = TitleCaseOptions::new().keep_spaces(true);
  assert_eq!("A   B", title!("a   b", opts));
  assert_eq!("One ,  Two", title!("one ,  two", opts));
  assert_eq!("A\tB\nC", title!("a\tb\nc", opts));
}

#[test]
fn keep_spaces_keeps_default_stopwords() {
  let opts = TitleCaseOptions::new().keep_spaces(true);
  assert_eq!("A  Tale of Two", title!("a  tale of two", opts));
}

#[test]
fn punctuation_preserved() {
  assert_eq!("Well-Known Issue", title!("well-known issue"));
  assert_eq!("Well-Known Issue", title!("well-known issue", TitleCaseOptions::new().keep_spaces(true)));
  assert_eq!("Input/Output", title!("input/output"));
  assert_eq!("Wait — What?", title!("wait — what?"));
}

#[test]
fn punctuation_splits_words() {
  assert_eq!("Star Wars: the Empire Strikes Back", title!("star wars: the empire strikes back"));
  assert_eq!("(the) End", title!("(the) end"));
}

#[test]
fn embedded_capitals_preserved() {
  assert_eq!("NASA and the IPhone", title!("NASA and the iPhone"));
  assert_eq!("WAR and PEACE", title!("WAR AND PEACE"));
}

#[test]
fn unicode_words() {
  assert_eq!("Élan Vital", title!("élan vital"));
  assert_eq!("Über Alles", title!("über\u{A0}alles"));
}

// Leading and trailing separators put an empty segment at the ends of the
// sequence, so the first or last word is treated as interior.
#[test]
fn boundary_separator_quirk() {
  assert_eq!(" of Mice", title!(" of mice"));
  assert_eq!("War of ", title!("war of "));
  assert_eq!("-the Thing-", title!("-the thing-"));
}

#[test]
fn stable_when_reapplied() {
  let inputs = [
    "a tale of two cities",
    "the quick brown fox",
    "well-known issue",
    "star wars: the empire strikes back",
    "a   b",
    "NASA and the iPhone",
    "wait — what?",
  ];

  for input in inputs {
    let once = title!(input);
    assert_eq!(once, title!(once.as_str()), "input: {:?}", input);
  }
}

#[test]
fn caser_reusable() {
  let caser = TitleCaser::new().stopwords(Stopwords::new(["vs"]));
  assert_eq!("Alien vs Predator", caser.apply("alien vs predator"));
  assert_eq!("Kramer vs Kramer", caser.apply("kramer VS kramer"));
  assert_eq!("", caser.apply(""));
}

#[test]
fn concurrent_callers() {
  let handles: Vec<_> = (0..4)
    .map(|_| std::thread::spawn(|| title!("a tale of two cities")))
    .collect();

  for handle in handles {
    assert_eq!("A Tale of Two Cities", handle.join().unwrap());
  }
}

#[test]
fn split_sequence_shape() {
  let segments = split("well-known, issue");
  assert_eq!(7, segments.len());
  assert_matches!(segments[0], Segment::Content("well"));
  assert_matches!(segments[1], Segment::Separator(Separator::Punctuation("-")));
  assert_matches!(segments[3], Segment::Separator(Separator::Punctuation(",")));
  assert_matches!(segments[4], Segment::Content(""));
  assert_matches!(segments[5], Segment::Separator(Separator::Whitespace(" ")));
  assert_matches!(segments[6], Segment::Content("issue"));
}
