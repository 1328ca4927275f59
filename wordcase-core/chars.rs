use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

/// Coarse character classes used to find word boundaries.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCategory {
  /// Uppercase and titlecase letters.
  Upper,
  Lower,
  /// Letters without case, e.g. CJK ideographs or modifier letters.
  Uncased,
  Digit,
  Mark,
  Separator,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match get_general_category(ch) {
    GeneralCategory::UppercaseLetter | GeneralCategory::TitlecaseLetter => CharCategory::Upper,
    GeneralCategory::LowercaseLetter => CharCategory::Lower,
    GeneralCategory::ModifierLetter | GeneralCategory::OtherLetter => CharCategory::Uncased,
    GeneralCategory::DecimalNumber
    | GeneralCategory::LetterNumber
    | GeneralCategory::OtherNumber => CharCategory::Digit,
    GeneralCategory::NonspacingMark
    | GeneralCategory::SpacingMark
    | GeneralCategory::EnclosingMark => CharCategory::Mark,
    _ => CharCategory::Separator,
  }
}

#[inline]
pub fn char_is_upper(ch: char) -> bool {
  categorize_char(ch) == CharCategory::Upper
}

#[inline]
pub fn char_is_lower(ch: char) -> bool {
  categorize_char(ch) == CharCategory::Lower
}

#[inline]
pub fn char_is_variation_selector(ch: char) -> bool {
  matches!(ch, '\u{FE00}'..='\u{FE0F}' | '\u{E0100}'..='\u{E01EF}')
}

/// Combining diacritics: nonspacing marks that attach to a base letter.
///
/// Variation selectors are nonspacing marks as well, but they pick a glyph
/// (text vs emoji presentation) rather than decorate one, so they are kept.
#[inline]
pub fn char_is_diacritic(ch: char) -> bool {
  !char_is_variation_selector(ch)
    && matches!(get_general_category(ch), GeneralCategory::NonspacingMark)
}
