//! Translation between the code-unit offsets reported by the pattern engine
//! and grapheme cluster positions.
//!
//! Every index a user sees counts extended grapheme clusters: `"héllo"` has
//! five of them no matter whether the `é` is one code point or two. The
//! pattern engine on the other hand reports UTF-8 byte offsets. All byte
//! arithmetic is confined to this module.
//!
//! For a single lookup the free functions are enough. When many ranges of the
//! same text need translating, build a [`GraphemeMap`] once and query it.

use std::{
  iter,
  ops::Range,
};

use unicode_segmentation::{
  GraphemeCursor,
  UnicodeSegmentation,
};
use wordcase_stdx::pattern::CodeUnitRange;

/// A position counted in extended grapheme clusters.
pub type GraphemeIndex = usize;

/// A half-open range of grapheme positions. `start <= end` always holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphemeRange {
  pub start: GraphemeIndex,
  pub end:   GraphemeIndex,
}

impl GraphemeRange {
  /// Returns `None` if `start > end`.
  #[inline]
  pub const fn new(start: GraphemeIndex, end: GraphemeIndex) -> Option<Self> {
    if start > end {
      None
    } else {
      Some(Self { start, end })
    }
  }

  #[inline]
  pub const fn len(&self) -> usize {
    self.end - self.start
  }

  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.start == self.end
  }

  #[inline]
  pub const fn contains(&self, index: GraphemeIndex) -> bool {
    self.start <= index && index < self.end
  }

  #[inline]
  pub const fn as_range(&self) -> Range<GraphemeIndex> {
    self.start..self.end
  }
}

/// Whether `offset` is a grapheme boundary of `text`. `0` and `text.len()`
/// always are; anything past the end never is.
#[must_use]
pub fn is_grapheme_boundary(text: &str, offset: usize) -> bool {
  if offset > text.len() || !text.is_char_boundary(offset) {
    return false;
  }

  // The whole text is a single chunk starting at 0, so the cursor never asks
  // for more context.
  GraphemeCursor::new(offset, text.len(), true)
    .is_boundary(text, 0)
    .unwrap_or(false)
}

#[must_use]
pub fn grapheme_len(text: &str) -> usize {
  text.graphemes(true).count()
}

/// Map a code-unit range onto grapheme positions.
///
/// Returns `None` if either end of `range` is out of bounds or does not sit
/// on a grapheme boundary, e.g. inside a multi-byte code point or between a
/// base letter and its combining accent.
#[must_use]
pub fn to_grapheme_range(range: CodeUnitRange, text: &str) -> Option<GraphemeRange> {
  let end = range.start.checked_add(range.length)?;
  if !is_grapheme_boundary(text, range.start) || !is_grapheme_boundary(text, end) {
    return None;
  }

  // Segmenting a prefix that ends on a boundary yields the same clusters as
  // the full text up to that boundary.
  Some(GraphemeRange {
    start: grapheme_len(&text[..range.start]),
    end:   grapheme_len(&text[..end]),
  })
}

/// The code-unit offset at which grapheme `index` starts.
///
/// Indices at or past the end clamp to `text.len()`.
#[must_use]
pub fn to_code_unit_offset(index: GraphemeIndex, text: &str) -> usize {
  text
    .grapheme_indices(true)
    .nth(index)
    .map_or(text.len(), |(offset, _)| offset)
}

/// Inverse of [`to_grapheme_range`]. Returns `None` if `range` reaches past
/// the end of `text`.
#[must_use]
pub fn to_code_unit_range(range: GraphemeRange, text: &str) -> Option<CodeUnitRange> {
  GraphemeMap::new(text).to_code_unit_range(range)
}

/// Grapheme boundary table for one text.
///
/// Holds the byte offset of every grapheme boundary, including `0` and
/// `text.len()`, so lookups in either direction are a slice index or a binary
/// search.
#[derive(Debug, Clone)]
pub struct GraphemeMap<'a> {
  text:       &'a str,
  boundaries: Vec<usize>,
}

impl<'a> GraphemeMap<'a> {
  pub fn new(text: &'a str) -> Self {
    let boundaries = text
      .grapheme_indices(true)
      .map(|(offset, _)| offset)
      .chain(iter::once(text.len()))
      .collect();

    Self { text, boundaries }
  }

  /// Number of grapheme clusters.
  #[inline]
  pub fn len(&self) -> usize {
    self.boundaries.len() - 1
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// The grapheme position that starts at byte `offset`, or `text.len()`'s
  /// position for the end. `None` for offsets that are not boundaries.
  pub fn grapheme_index(&self, offset: usize) -> Option<GraphemeIndex> {
    self.boundaries.binary_search(&offset).ok()
  }

  /// The first boundary strictly after byte `offset`.
  pub fn next_boundary(&self, offset: usize) -> Option<usize> {
    let next = self.boundaries.partition_point(|&boundary| boundary <= offset);
    self.boundaries.get(next).copied()
  }

  /// Byte offset of grapheme `index`, clamped to `text.len()`.
  pub fn code_unit_offset(&self, index: GraphemeIndex) -> usize {
    self
      .boundaries
      .get(index)
      .copied()
      .unwrap_or(self.text.len())
  }

  pub fn to_grapheme_range(&self, range: CodeUnitRange) -> Option<GraphemeRange> {
    let end = range.start.checked_add(range.length)?;
    let start = self.grapheme_index(range.start)?;
    let end = self.grapheme_index(end)?;
    Some(GraphemeRange { start, end })
  }

  pub fn to_code_unit_range(&self, range: GraphemeRange) -> Option<CodeUnitRange> {
    let start = *self.boundaries.get(range.start)?;
    let end = *self.boundaries.get(range.end)?;
    Some(CodeUnitRange::from(start..end))
  }

  /// The grapheme cluster at `index`.
  pub fn grapheme(&self, index: GraphemeIndex) -> Option<&'a str> {
    self.slice(GraphemeRange {
      start: index,
      end:   index.checked_add(1)?,
    })
  }

  /// The text covered by `range`, or `None` if it reaches past the end.
  pub fn slice(&self, range: GraphemeRange) -> Option<&'a str> {
    let range = self.to_code_unit_range(range)?;
    self.text.get(range.as_range())
  }
}
