//! Type-safe enums for the trainer
//!
//! This module replaces stringly-typed choices with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What kind of label each cell carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SymbolType {
    /// Decimal numbers 1..size²
    #[default]
    Numbers,
    /// One- or two-letter Cyrillic codes
    Letters,
}

/// Cell placement order for a freshly generated table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OrderMode {
    /// Uniform random permutation (the normal training mode)
    #[default]
    Random,
    /// Ascending rank order, useful for warming up
    Sequential,
}

/// Color theme, persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Flip between light and dark
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_symbol_type_roundtrip() {
        for variant in [SymbolType::Numbers, SymbolType::Letters] {
            let s = variant.to_string();
            assert_eq!(SymbolType::from_str(&s).unwrap(), variant);
        }
        assert_eq!(SymbolType::Numbers.to_string(), "numbers");
        assert_eq!(SymbolType::from_str("Letters").unwrap(), SymbolType::Letters);
    }

    #[test]
    fn test_order_mode_roundtrip() {
        for variant in [OrderMode::Random, OrderMode::Sequential] {
            let s = variant.to_string();
            assert_eq!(OrderMode::from_str(&s).unwrap(), variant);
        }
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_serde_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeMode::Light);
    }
}
