//! Splitting text into words.
//!
//! Two grammars compete. The *basic* grammar treats every maximal run of
//! letters, marks and digits as one word. The *complex* grammar also breaks
//! inside such runs: at lowercase-to-uppercase transitions (`fooBar`), at the
//! end of an acronym (`XMLHttp`) and between letters and digits (`v2`).
//!
//! A probe decides which grammar applies. With
//! [`GrammarSelection::Global`] it looks at the whole text once; with
//! [`GrammarSelection::PerToken`] it looks at each basic run on its own.
//!
//! Matches come back from the pattern engine as byte ranges and are turned
//! into grapheme ranges before they become [`Word`]s. A match whose edges do
//! not fall on grapheme boundaries is dropped and segmentation carries on.
//!
//! ```ignore
//! use wordcase_lib::words::words;
//!
//! let words = words("XMLHttpRequest2");
//! let words: Vec<_> = words.iter().map(|w| w.as_str()).collect();
//! assert_eq!(words, ["XML", "Http", "Request", "2"]);
//! ```

use std::{
  fmt,
  slice,
  vec,
};

use once_cell::sync::Lazy;
use wordcase_core::{
  chars::{
    CharCategory,
    categorize_char,
    char_is_lower,
    char_is_upper,
  },
  diacritics::strip_diacritics,
  grapheme::{
    GraphemeMap,
    GraphemeRange,
  },
};
use wordcase_stdx::pattern::{
  CodeUnitRange,
  Matcher,
};

use crate::{
  Tendril,
  config::{
    GrammarSelection,
    SegmentConfig,
  },
};

/// Answers "does this text need the complex grammar?".
static HAS_COMPLEX_WORD: Lazy<Matcher> = Lazy::new(|| {
  Matcher::new(
    r"\p{Ll}[\p{Lu}\p{Lt}]|[\p{Lu}\p{Lt}]{2}\p{Ll}|\p{N}\p{L}|\p{L}\p{N}",
  )
  .expect("complex word probe should compile")
});

// A run starts on a letter or digit. A mark in front of it belongs to the
// separator's cluster.
static BASIC_WORD: Lazy<Matcher> = Lazy::new(|| {
  Matcher::new(r"[\p{L}\p{N}][\p{L}\p{M}\p{N}]*").expect("basic word grammar should compile")
});

// Alternatives, tried left to right at each position:
// 0: capitalized or lowercase word (`Http`, `foo`)
// 1: uppercase run (`XML`, or a lone `A`); see `end_of_acronym`
// 2: number
// 3: letters without case (`漢字`)
// Every letter and digit carries the marks that follow it, so no match ends
// inside a cluster like `E\u{0301}`.
static COMPLEX_WORD: Lazy<Matcher> = Lazy::new(|| {
  Matcher::new(concat!(
    r"(?:[\p{Lu}\p{Lt}]\p{M}*)?\p{Ll}[\p{Ll}\p{M}]*",
    r"|(?:[\p{Lu}\p{Lt}]\p{M}*)+",
    r"|\p{N}[\p{N}\p{M}]*",
    r"|[\p{Lo}\p{Lm}][\p{Lo}\p{Lm}\p{M}]*",
  ))
  .expect("complex word grammar should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
  Basic,
  Complex,
}

/// Run the probe over `text`.
pub fn detect_grammar(text: &str) -> Grammar {
  if HAS_COMPLEX_WORD.tests_against(text) {
    Grammar::Complex
  } else {
    Grammar::Basic
  }
}

/// A word cut out of the normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
  text:  Tendril,
  range: GraphemeRange,
}

impl Word {
  #[inline]
  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// Where the word sits in [`WordSequence::normalized`].
  #[inline]
  pub fn range(&self) -> GraphemeRange {
    self.range
  }
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

/// The words of one text, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSequence {
  normalized: String,
  grammar:    Grammar,
  words:      Vec<Word>,
}

impl WordSequence {
  /// The text the words were cut from, after diacritic stripping.
  pub fn normalized(&self) -> &str {
    &self.normalized
  }

  /// [`Grammar::Complex`] if any part of the text was segmented with the
  /// complex grammar.
  pub fn grammar(&self) -> Grammar {
    self.grammar
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, Word> {
    self.words.iter()
  }

  pub fn as_slice(&self) -> &[Word] {
    &self.words
  }

  pub fn into_vec(self) -> Vec<Word> {
    self.words
  }
}

impl IntoIterator for WordSequence {
  type IntoIter = vec::IntoIter<Word>;
  type Item = Word;

  fn into_iter(self) -> Self::IntoIter {
    self.words.into_iter()
  }
}

impl<'a> IntoIterator for &'a WordSequence {
  type IntoIter = slice::Iter<'a, Word>;
  type Item = &'a Word;

  fn into_iter(self) -> Self::IntoIter {
    self.words.iter()
  }
}

/// Segment `text` with the default configuration.
pub fn words(text: &str) -> WordSequence {
  words_with(text, &SegmentConfig::default())
}

pub fn words_with(text: &str, config: &SegmentConfig) -> WordSequence {
  let normalized = if config.strip_diacritics {
    strip_diacritics(text).into_owned()
  } else {
    text.to_owned()
  };

  let (grammar, ranges) = match config.grammar {
    GrammarSelection::Global => segment_global(&normalized),
    GrammarSelection::PerToken => segment_per_token(&normalized),
  };
  tracing::trace!(?grammar, selection = ?config.grammar, "segmenting {normalized:?}");

  let words = {
    let map = GraphemeMap::new(&normalized);
    ranges
      .into_iter()
      .filter(|range| !range.is_empty())
      .filter_map(|range| {
        let Some(graphemes) = map.to_grapheme_range(range) else {
          tracing::debug!(
            start = range.start,
            end = range.end(),
            "dropping word that splits a grapheme cluster"
          );
          return None;
        };

        Some(Word {
          text:  Tendril::from(&normalized[range.as_range()]),
          range: graphemes,
        })
      })
      .collect()
  };

  WordSequence {
    normalized,
    grammar,
    words,
  }
}

fn segment_global(text: &str) -> (Grammar, Vec<CodeUnitRange>) {
  let grammar = detect_grammar(text);
  let ranges = match grammar {
    Grammar::Basic => BASIC_WORD.all_match_ranges(text),
    Grammar::Complex => {
      let mut ranges = Vec::new();
      complex_ranges(text, 0, &mut ranges);
      ranges
    },
  };
  (grammar, ranges)
}

fn segment_per_token(text: &str) -> (Grammar, Vec<CodeUnitRange>) {
  let mut grammar = Grammar::Basic;
  let mut ranges = Vec::new();

  for run in BASIC_WORD.all_match_ranges(text) {
    let run_text = &text[run.as_range()];
    match detect_grammar(run_text) {
      Grammar::Basic => ranges.push(run),
      Grammar::Complex => {
        tracing::trace!(start = run.start, "complex run {run_text:?}");
        grammar = Grammar::Complex;
        complex_ranges(run_text, run.start, &mut ranges);
      },
    }
  }

  (grammar, ranges)
}

/// Append the complex-grammar words of `text` to `out`, shifted by `base`.
fn complex_ranges(text: &str, base: usize, out: &mut Vec<CodeUnitRange>) {
  let mut pos = 0;
  while let Some(found) = COMPLEX_WORD.first_match_range_from(text, pos) {
    if found.is_empty() {
      break;
    }

    let end = end_of_acronym(text, found);
    out.push(CodeUnitRange::from(base + found.start..base + end));
    pos = end;
  }
}

/// In `XMLParser` the uppercase run matches `XMLP`. When a run of two or more
/// uppercase letters is directly followed by a lowercase letter, its last
/// letter (with any marks on it) belongs to the next word, so the run ends
/// before it.
fn end_of_acronym(text: &str, found: CodeUnitRange) -> usize {
  let token = &text[found.as_range()];
  let end = found.end();

  let upper_or_mark =
    |ch: char| matches!(categorize_char(ch), CharCategory::Upper | CharCategory::Mark);
  if !token.chars().all(upper_or_mark) {
    return end;
  }
  let Some((last, _)) = token.char_indices().rfind(|&(_, ch)| char_is_upper(ch)) else {
    return end;
  };
  if last == 0 {
    return end;
  }

  match text[end..].chars().next() {
    Some(next) if char_is_lower(next) => found.start + last,
    _ => end,
  }
}
