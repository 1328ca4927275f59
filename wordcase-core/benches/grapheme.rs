//! Benchmarks for index translation and diacritic stripping in wordcase-core.
//!
//! Run with: `cargo bench -p wordcase-core`

use divan::{
  Bencher,
  black_box,
};
use wordcase_core::{
  diacritics::strip_diacritics,
  grapheme::{
    GraphemeMap,
    to_code_unit_offset,
    to_grapheme_range,
  },
};
use wordcase_stdx::pattern::CodeUnitRange;

fn main() {
  divan::main();
}

// Test data generators.

fn repeat_to(line: &str, size: usize) -> String {
  let mut s = String::with_capacity(size);
  while s.len() < size {
    s.push_str(line);
  }
  // Truncate at char boundary
  while s.len() > size {
    s.pop();
  }
  s
}

fn make_ascii_text(size: usize) -> String {
  repeat_to("The quick brown fox jumps over the lazy dog. ", size)
}

fn make_accented_text(size: usize) -> String {
  repeat_to("Crème brûlée à la façon de Ångström. ", size)
}

fn make_combining_text(size: usize) -> String {
  // "a\u{0301}" = á (a + combining acute), 3 bytes per grapheme
  repeat_to("a\u{0301}", size)
}

fn make_mixed_text(size: usize) -> String {
  repeat_to("Hello 世界! 🎉 Test テスト 😀 ", size)
}

mod strip {
  use super::*;

  const SIZE: usize = 4096;

  #[divan::bench]
  fn ascii(bencher: Bencher) {
    let text = make_ascii_text(SIZE);
    bencher.bench(|| strip_diacritics(black_box(&text)).len());
  }

  #[divan::bench]
  fn accented(bencher: Bencher) {
    let text = make_accented_text(SIZE);
    bencher.bench(|| strip_diacritics(black_box(&text)).len());
  }

  #[divan::bench]
  fn combining(bencher: Bencher) {
    let text = make_combining_text(SIZE);
    bencher.bench(|| strip_diacritics(black_box(&text)).len());
  }
}

mod translate {
  use super::*;

  const SIZE: usize = 4096;

  fn tail_range(text: &str) -> CodeUnitRange {
    let start = GraphemeMap::new(text).code_unit_offset(text.len() / 8);
    CodeUnitRange::from(start..text.len())
  }

  #[divan::bench]
  fn free_function_mixed(bencher: Bencher) {
    let text = make_mixed_text(SIZE);
    let range = tail_range(&text);
    bencher.bench(|| to_grapheme_range(black_box(range), black_box(&text)));
  }

  #[divan::bench]
  fn map_build_mixed(bencher: Bencher) {
    let text = make_mixed_text(SIZE);
    bencher.bench(|| GraphemeMap::new(black_box(&text)).len());
  }

  #[divan::bench]
  fn map_lookup_mixed(bencher: Bencher) {
    let text = make_mixed_text(SIZE);
    let map = GraphemeMap::new(&text);
    let range = tail_range(&text);
    bencher.bench(|| map.to_grapheme_range(black_box(range)));
  }

  #[divan::bench]
  fn code_unit_offset_combining(bencher: Bencher) {
    let text = make_combining_text(SIZE);
    bencher.bench(|| to_code_unit_offset(black_box(500), black_box(&text)));
  }
}
