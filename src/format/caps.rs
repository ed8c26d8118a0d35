/// Writes `word` to `output` with its first character uppercased.
///
/// The rest of the word is written unchanged, so embedded capitals survive.
/// Uppercasing may expand the first character (e.g. `ß` becomes `SS`).
#[inline]
pub fn write_capitalized(word: &str, output: &mut String) {
  let mut chars = word.chars();
  if let Some(first) = chars.next() {
    output.extend(first.to_uppercase());
    output.push_str(chars.as_str());
  }
}

/// Returns `word` with its first character uppercased.
pub fn capitalize(word: &str) -> String {
  let mut output = String::with_capacity(word.len());
  write_capitalized(word, &mut output);
  output
}
