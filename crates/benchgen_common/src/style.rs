//! The closed set of specification styles a bench can be generated for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The framework the generated specification is written against.
///
/// This is a closed set: every place that varies by style matches on it
/// exhaustively, so adding a style is a compile error until each template
/// handles it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecStyle {
    /// A plain class whose constructor performs the setup (default).
    #[default]
    Generic,
    /// xUnit-style test case (`Test::Unit`).
    XUnit,
    /// Behavior-spec style (`RSpec`).
    RSpec,
    /// Table/context spec style (`test/spec`).
    TSpec,
}

impl SpecStyle {
    /// Every member of the closed set, in declaration order.
    pub const ALL: [SpecStyle; 4] = [
        SpecStyle::Generic,
        SpecStyle::XUnit,
        SpecStyle::RSpec,
        SpecStyle::TSpec,
    ];

    /// Returns the canonical lowercase name used on the command line and in
    /// `benchgen.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecStyle::Generic => "generic",
            SpecStyle::XUnit => "xunit",
            SpecStyle::RSpec => "rspec",
            SpecStyle::TSpec => "tspec",
        }
    }
}

impl fmt::Display for SpecStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style name that is not a member of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown specification style '{0}' (expected generic, xunit, rspec, or tspec)")]
pub struct StyleParseError(pub String);

impl FromStr for SpecStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(SpecStyle::Generic),
            "xunit" | "test-unit" | "test_unit" => Ok(SpecStyle::XUnit),
            "rspec" => Ok(SpecStyle::RSpec),
            "tspec" | "test-spec" | "test_spec" => Ok(SpecStyle::TSpec),
            _ => Err(StyleParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_generic() {
        assert_eq!(SpecStyle::default(), SpecStyle::Generic);
    }

    #[test]
    fn parse_canonical_names() {
        for style in SpecStyle::ALL {
            assert_eq!(style.as_str().parse::<SpecStyle>(), Ok(style));
        }
    }

    #[test]
    fn parse_aliases_and_case() {
        assert_eq!("Test-Unit".parse::<SpecStyle>(), Ok(SpecStyle::XUnit));
        assert_eq!("test_spec".parse::<SpecStyle>(), Ok(SpecStyle::TSpec));
        assert_eq!(" RSpec ".parse::<SpecStyle>(), Ok(SpecStyle::RSpec));
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "minitest".parse::<SpecStyle>().unwrap_err();
        assert_eq!(err, StyleParseError("minitest".to_string()));
        assert!(err.to_string().contains("unknown specification style 'minitest'"));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(SpecStyle::XUnit.to_string(), "xunit");
        assert_eq!(SpecStyle::TSpec.to_string(), "tspec");
    }

    #[test]
    fn serde_roundtrip() {
        for style in SpecStyle::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
            let back: SpecStyle = serde_json::from_str(&json).unwrap();
            assert_eq!(back, style);
        }
    }
}
