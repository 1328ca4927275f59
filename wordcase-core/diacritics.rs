//! Diacritic folding: `"Crème Brûlée"` becomes `"Creme Brulee"`.
//!
//! Each character is canonically decomposed on its own. If the decomposition
//! carries a diacritic, the character is replaced by what remains once the
//! diacritics are removed; otherwise it is kept exactly as it was. Characters
//! that merely *have* a canonical decomposition without any diacritic in it
//! (Hangul syllables, the Ohm sign, Indic two-part vowels) are never touched,
//! so only combining marks ever disappear from the text.

use std::borrow::Cow;

use unicode_normalization::char::decompose_canonical;

use crate::chars::char_is_diacritic;

/// Remove every combining diacritic from `input`.
///
/// Borrows `input` when there is nothing to strip.
pub fn strip_diacritics(input: &str) -> Cow<'_, str> {
  if input.is_ascii() {
    return Cow::Borrowed(input);
  }

  let mut out = String::with_capacity(input.len());
  let mut decomposed = Vec::with_capacity(4);
  let mut changed = false;

  for ch in input.chars() {
    if char_is_diacritic(ch) {
      changed = true;
      continue;
    }

    decomposed.clear();
    decompose_canonical(ch, |c| decomposed.push(c));

    if decomposed.iter().any(|&c| char_is_diacritic(c)) {
      changed = true;
      out.extend(decomposed.iter().copied().filter(|&c| !char_is_diacritic(c)));
    } else {
      out.push(ch);
    }
  }

  if changed {
    Cow::Owned(out)
  } else {
    Cow::Borrowed(input)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_precomposed_accents() {
    assert_eq!(strip_diacritics("héllo"), "hello");
    assert_eq!(strip_diacritics("Crème Brûlée"), "Creme Brulee");
    assert_eq!(strip_diacritics("façade"), "facade");
    assert_eq!(strip_diacritics("Ångström"), "Angstrom");
    assert_eq!(strip_diacritics("ệ"), "e");
  }

  #[test]
  fn strips_decomposed_accents() {
    assert_eq!(strip_diacritics("he\u{0301}llo"), "hello");
    assert_eq!(strip_diacritics("n\u{0303}a\u{0308}"), "na");
  }

  #[test]
  fn leaves_other_text_alone() {
    assert!(matches!(strip_diacritics("plain ascii 123!"), Cow::Borrowed(_)));
    assert!(matches!(strip_diacritics("漢字 😀"), Cow::Borrowed(_)));
    assert_eq!(strip_diacritics("한국어"), "한국어");
    assert_eq!(strip_diacritics("ß \u{2126}"), "ß \u{2126}");
    // Emoji presentation selector is not a diacritic.
    assert_eq!(strip_diacritics("\u{2764}\u{FE0F}"), "\u{2764}\u{FE0F}");
    // Tamil two-part vowel sign decomposes into spacing marks only.
    assert_eq!(strip_diacritics("\u{0BCA}"), "\u{0BCA}");
  }

  #[test]
  fn empty() {
    assert_eq!(strip_diacritics(""), "");
  }

  quickcheck::quickcheck! {
    fn ascii_is_unchanged(text: String) -> bool {
      let ascii: String = text.chars().filter(char::is_ascii).collect();
      strip_diacritics(&ascii) == ascii.as_str()
    }

    fn never_leaves_a_diacritic(text: String) -> bool {
      !strip_diacritics(&text).chars().any(char_is_diacritic)
    }

    fn is_idempotent(text: String) -> bool {
      let once = strip_diacritics(&text).into_owned();
      strip_diacritics(&once) == once.as_str()
    }
  }
}
