//! A thin pattern-matching engine over `regex_automata::meta::Regex`.
//!
//! Everything in this module speaks in *code units*: the regex engine
//! searches UTF-8 bytes, so every offset and every [`CodeUnitRange`] handed
//! out here is a byte offset into the searched text. Translating those
//! offsets into user-visible positions is the caller's job.
//!
//! # Examples
//!
//! ```ignore
//! use wordcase_stdx::pattern::Matcher;
//!
//! let matcher = Matcher::new(r"\d+").unwrap();
//! assert!(matcher.tests_against("abc123"));
//! assert_eq!(matcher.first_match_range("abc123").unwrap().as_range(), 3..6);
//! ```

use std::{
  fmt,
  ops::Range,
};

use regex_automata::{
  Input,
  meta::{
    BuildError,
    Regex,
  },
};
use thiserror::Error;

/// Errors produced while compiling a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
  #[error("invalid pattern `{pattern}`: {source}")]
  Build {
    pattern: String,
    #[source]
    source:  Box<BuildError>,
  },
}

/// A half-open range of code units (UTF-8 bytes) reported by a [`Matcher`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeUnitRange {
  pub start:  usize,
  pub length: usize,
}

impl CodeUnitRange {
  #[inline]
  pub const fn new(start: usize, length: usize) -> Self {
    Self { start, length }
  }

  #[inline]
  pub const fn end(&self) -> usize {
    self.start + self.length
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.length == 0
  }

  #[inline]
  pub const fn as_range(&self) -> Range<usize> {
    self.start..self.end()
  }
}

impl From<Range<usize>> for CodeUnitRange {
  fn from(range: Range<usize>) -> Self {
    Self {
      start:  range.start,
      length: range.end.saturating_sub(range.start),
    }
  }
}

/// A compiled pattern.
#[derive(Clone)]
pub struct Matcher {
  pattern: String,
  regex:   Regex,
}

impl Matcher {
  /// Compile `pattern` with the default (Unicode aware) syntax.
  pub fn new(pattern: &str) -> Result<Self, PatternError> {
    let regex = Regex::new(pattern).map_err(|err| {
      PatternError::Build {
        pattern: pattern.to_owned(),
        source:  Box::new(err),
      }
    })?;

    Ok(Self {
      pattern: pattern.to_owned(),
      regex,
    })
  }

  /// Compile a matcher that finds `literal` verbatim.
  pub fn literal(literal: &str) -> Result<Self, PatternError> {
    Self::new(&escape(literal))
  }

  /// The source text this matcher was compiled from.
  pub fn as_str(&self) -> &str {
    &self.pattern
  }

  pub fn tests_against(&self, text: &str) -> bool {
    self.regex.is_match(text)
  }

  pub fn first_match_range(&self, text: &str) -> Option<CodeUnitRange> {
    self.first_match_range_from(text, 0)
  }

  /// Like [`Matcher::first_match_range`] but only reports matches starting
  /// at or after `offset`. The text before `offset` still serves as context
  /// for assertions such as `\b`.
  ///
  /// Returns `None` if `offset` is past the end of `text`.
  pub fn first_match_range_from(&self, text: &str, offset: usize) -> Option<CodeUnitRange> {
    if offset > text.len() {
      return None;
    }

    let input = Input::new(text).range(offset..);
    self
      .regex
      .find(input)
      .map(|mat| CodeUnitRange::from(mat.range()))
  }

  /// All non-overlapping matches, left to right.
  pub fn all_match_ranges(&self, text: &str) -> Vec<CodeUnitRange> {
    self
      .regex
      .find_iter(text)
      .map(|mat| CodeUnitRange::from(mat.range()))
      .collect()
  }
}

impl fmt::Debug for Matcher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Matcher").field(&self.pattern).finish()
  }
}

/// Escape every metacharacter in `literal` so it can be embedded in a pattern
/// and match itself.
pub fn escape(literal: &str) -> String {
  regex_syntax::escape(literal)
}
