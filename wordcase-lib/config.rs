use serde::{
  Deserialize,
  Serialize,
};

/// How the tokenizer picks between the basic and the complex grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrammarSelection {
  /// Probe the whole text once. If any part of it needs the complex grammar,
  /// the complex grammar segments all of it.
  Global,
  /// Cut the text into basic runs first and only re-segment the runs that
  /// need the complex grammar.
  PerToken,
}

impl Default for GrammarSelection {
  fn default() -> Self {
    Self::Global
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SegmentConfig {
  pub grammar:          GrammarSelection,
  pub strip_diacritics: bool,
}

impl Default for SegmentConfig {
  fn default() -> Self {
    Self {
      grammar:          GrammarSelection::Global,
      strip_diacritics: true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    GrammarSelection,
    SegmentConfig,
  };

  #[test]
  fn defaults_follow_global_selection() {
    let config = SegmentConfig::default();
    assert_eq!(config.grammar, GrammarSelection::Global);
    assert!(config.strip_diacritics);
  }

  #[test]
  fn parses_kebab_case_toml() {
    let config: SegmentConfig = toml::from_str(
      r#"
        grammar = "per-token"
        strip-diacritics = false
      "#,
    )
    .unwrap();
    assert_eq!(config, SegmentConfig {
      grammar:          GrammarSelection::PerToken,
      strip_diacritics: false,
    });
  }

  #[test]
  fn missing_fields_use_defaults() {
    let config: SegmentConfig = toml::from_str("grammar = \"per-token\"").unwrap();
    assert!(config.strip_diacritics);

    let config: SegmentConfig = toml::from_str("").unwrap();
    assert_eq!(config, SegmentConfig::default());
  }

  #[test]
  fn rejects_unknown_fields() {
    assert!(toml::from_str::<SegmentConfig>("locale = \"tr\"").is_err());
    assert!(toml::from_str::<SegmentConfig>("grammar = \"sometimes\"").is_err());
  }
}
