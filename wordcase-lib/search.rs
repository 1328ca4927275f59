//! Grapheme-addressed access to a string.
//!
//! Every index in this module counts extended grapheme clusters, the
//! characters a user actually sees. Byte offsets coming out of the pattern
//! engine are translated with [`wordcase_core::grapheme`] before they reach
//! the caller.
//!
//! # Needles
//!
//! [`index_of`] accepts anything implementing [`Needle`]:
//! - `&str` - matched literally; metacharacters are escaped first
//! - [`Matcher`] - a compiled pattern
//!
//! # Examples
//!
//! ```ignore
//! use wordcase_lib::search::{character_at, index_of, substring};
//! use wordcase_lib::GraphemeRange;
//!
//! assert_eq!(index_of("héllo", "llo"), Some(2));
//! assert_eq!(character_at("he\u{0301}llo", 1), Some("e\u{0301}"));
//! assert_eq!(substring("héllo", GraphemeRange { start: 1, end: 3 }).unwrap(), "él");
//! ```
//!
//! # Design Notes
//!
//! - **Out of bounds is an error**: [`substring`] never clamps. A range past
//!   the end is a caller bug and comes back as [`SearchError::OutOfBounds`].
//! - **No match is not an error**: lookups that find nothing return `None`.
//!   [`index_of`] skips occurrences that split a grapheme cluster and keeps
//!   looking; [`first_match_substring`] returns `None` for them.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;
use wordcase_core::grapheme::{
  GraphemeIndex,
  GraphemeMap,
  GraphemeRange,
  grapheme_len,
  is_grapheme_boundary,
};
use wordcase_stdx::pattern::{
  Matcher,
  PatternError,
};

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
  #[error("range {start}..{end} is out of bounds for a text of {len} graphemes")]
  OutOfBounds {
    start: GraphemeIndex,
    end:   GraphemeIndex,
    len:   usize,
  },
  #[error("range {start}..{end} ends before it starts")]
  InvertedRange {
    start: GraphemeIndex,
    end:   GraphemeIndex,
  },
  #[error(transparent)]
  Pattern(#[from] PatternError),
}

/// Something [`index_of`] can look for.
pub trait Needle {
  /// Run `f` with the compiled form of the needle. `None` if it does not
  /// compile.
  fn with_matcher<R>(&self, f: impl FnOnce(&Matcher) -> R) -> Option<R>;
}

impl Needle for Matcher {
  fn with_matcher<R>(&self, f: impl FnOnce(&Matcher) -> R) -> Option<R> {
    Some(f(self))
  }
}

impl Needle for str {
  fn with_matcher<R>(&self, f: impl FnOnce(&Matcher) -> R) -> Option<R> {
    match Matcher::literal(self) {
      Ok(matcher) => Some(f(&matcher)),
      Err(err) => {
        tracing::warn!(%err, "failed to compile literal needle");
        None
      },
    }
  }
}

impl<N: Needle + ?Sized> Needle for &N {
  fn with_matcher<R>(&self, f: impl FnOnce(&Matcher) -> R) -> Option<R> {
    (**self).with_matcher(f)
  }
}

pub fn grapheme_count(text: &str) -> usize {
  grapheme_len(text)
}

/// The grapheme cluster at `index`, or `None` past the end.
pub fn character_at(text: &str, index: GraphemeIndex) -> Option<&str> {
  text.graphemes(true).nth(index)
}

/// The text covered by `range`.
///
/// # Errors
///
/// [`SearchError::InvertedRange`] if `range.start > range.end`,
/// [`SearchError::OutOfBounds`] if `range.end` is past the last grapheme.
pub fn substring(text: &str, range: GraphemeRange) -> Result<&str> {
  let GraphemeRange { start, end } = range;
  if start > end {
    return Err(SearchError::InvertedRange { start, end });
  }

  let map = GraphemeMap::new(text);
  map.slice(range).ok_or(SearchError::OutOfBounds {
    start,
    end,
    len: map.len(),
  })
}

/// The text of the first match of `matcher`, or `None` if that match starts
/// or ends inside a grapheme cluster.
pub fn first_match_substring<'a>(text: &'a str, matcher: &Matcher) -> Option<&'a str> {
  let found = matcher.first_match_range(text)?;
  if !is_grapheme_boundary(text, found.start) || !is_grapheme_boundary(text, found.end()) {
    return None;
  }
  text.get(found.as_range())
}

/// Compile `pattern` and return the text of its first match.
///
/// # Errors
///
/// [`SearchError::Pattern`] if `pattern` does not compile.
pub fn first_match_substring_of<'a>(text: &'a str, pattern: &str) -> Result<Option<&'a str>> {
  let matcher = Matcher::new(pattern)?;
  Ok(first_match_substring(text, &matcher))
}

/// Grapheme index of the first occurrence of `needle`.
pub fn index_of<N: Needle>(text: &str, needle: N) -> Option<GraphemeIndex> {
  index_of_from(text, needle, 0)
}

/// Grapheme index of the first occurrence of `needle` starting at or after
/// grapheme `from`.
///
/// Occurrences that start or end inside a grapheme cluster are skipped; the
/// search resumes at the next grapheme boundary.
pub fn index_of_from<N: Needle>(
  text: &str,
  needle: N,
  from: GraphemeIndex,
) -> Option<GraphemeIndex> {
  let map = GraphemeMap::new(text);
  if from > map.len() {
    return None;
  }

  needle
    .with_matcher(|matcher| {
      let mut offset = map.code_unit_offset(from);
      loop {
        let found = matcher.first_match_range_from(text, offset)?;
        if let Some(range) = map.to_grapheme_range(found) {
          return Some(range.start);
        }
        tracing::trace!(start = found.start, "skipping match inside a grapheme cluster");
        offset = map.next_boundary(found.start)?;
      }
    })
    .flatten()
}
