pub mod chars;
pub mod diacritics;
pub mod grapheme;
