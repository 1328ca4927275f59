use smartstring::{LazyCompact, SmartString};

pub mod case_convention;
pub mod config;
pub mod search;
pub mod words;

pub use wordcase_core::grapheme::{GraphemeIndex, GraphemeRange};

pub type Tendril = SmartString<LazyCompact>;
