use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  Tendril,
  words::{
    Word,
    WordSequence,
    words,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
  /// `fooBarBaz`
  Camel,
  /// `FooBarBaz`
  Pascal,
  /// `foo-bar-baz`
  Kebab,
  /// `foo_bar_baz`
  Snake,
  /// `Foo Bar Baz`
  Start,
}

impl CaseStyle {
  fn separator(self) -> Option<char> {
    match self {
      Self::Camel | Self::Pascal => None,
      Self::Kebab => Some('-'),
      Self::Snake => Some('_'),
      Self::Start => Some(' '),
    }
  }

  fn push_word(self, index: usize, word: &str, buf: &mut Tendril) {
    match self {
      Self::Camel if index == 0 => push_lowercase(word, buf),
      Self::Camel | Self::Pascal | Self::Start => push_capitalized(word, buf),
      Self::Kebab | Self::Snake => push_lowercase(word, buf),
    }
  }
}

pub fn to_case(text: &str, style: CaseStyle) -> Tendril {
  format_words(&words(text), style)
}

pub fn format_words(words: &WordSequence, style: CaseStyle) -> Tendril {
  let mut res = Tendril::new();
  format_words_with(words, style, &mut res);
  res
}

pub fn format_words_with(words: &WordSequence, style: CaseStyle, buf: &mut Tendril) {
  words
    .iter()
    .map(Word::as_str)
    .enumerate()
    .for_each(|(index, word)| {
      if index > 0 {
        if let Some(sep) = style.separator() {
          buf.push(sep);
        }
      }
      style.push_word(index, word, buf);
    });
}

pub fn to_camel_case(text: &str) -> Tendril {
  to_case(text, CaseStyle::Camel)
}

pub fn to_camel_case_with(words: &WordSequence, buf: &mut Tendril) {
  format_words_with(words, CaseStyle::Camel, buf);
}

pub fn to_pascal_case(text: &str) -> Tendril {
  to_case(text, CaseStyle::Pascal)
}

pub fn to_pascal_case_with(words: &WordSequence, buf: &mut Tendril) {
  format_words_with(words, CaseStyle::Pascal, buf);
}

pub fn to_kebab_case(text: &str) -> Tendril {
  to_case(text, CaseStyle::Kebab)
}

pub fn to_kebab_case_with(words: &WordSequence, buf: &mut Tendril) {
  format_words_with(words, CaseStyle::Kebab, buf);
}

pub fn to_snake_case(text: &str) -> Tendril {
  to_case(text, CaseStyle::Snake)
}

pub fn to_snake_case_with(words: &WordSequence, buf: &mut Tendril) {
  format_words_with(words, CaseStyle::Snake, buf);
}

pub fn to_start_case(text: &str) -> Tendril {
  to_case(text, CaseStyle::Start)
}

pub fn to_start_case_with(words: &WordSequence, buf: &mut Tendril) {
  format_words_with(words, CaseStyle::Start, buf);
}

fn push_lowercase(word: &str, buf: &mut Tendril) {
  // `str::to_lowercase` knows about final sigma, `char::to_lowercase` doesn't.
  buf.push_str(&word.to_lowercase());
}

fn push_capitalized(word: &str, buf: &mut Tendril) {
  let mut chars = word.chars();
  if let Some(first) = chars.next() {
    buf.extend(first.to_uppercase());
    push_lowercase(chars.as_str(), buf);
  }
}
