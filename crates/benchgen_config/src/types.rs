//! Configuration types deserialized from `benchgen.toml`.

use benchgen_common::SpecStyle;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The contents of a `benchgen.toml` file. Every field is optional; unset
/// values fall back to command-line flags or built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Naming and output settings.
    #[serde(default)]
    pub generate: GenerateSection,
    /// Reconciliation of updated artifacts.
    #[serde(default)]
    pub merge: MergeSection,
}

/// The `[generate]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateSection {
    /// Specification style (`generic`, `xunit`, `rspec`, `tspec`).
    #[serde(default, deserialize_with = "deserialize_style")]
    pub style: Option<SpecStyle>,
    /// Test identifier inserted into every artifact name.
    pub name: Option<String>,
    /// Directory the artifacts are written into.
    pub output_dir: Option<String>,
    /// Location of the shared runner template loaded by generated runners.
    pub runtime_root: Option<String>,
}

/// The `[merge]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeSection {
    /// Command invoked as `<command> <old> <new> <live>` after an update.
    pub command: Option<String>,
}

/// Accepts any spelling [`SpecStyle`]'s `FromStr` accepts, including the
/// `test-unit`/`test-spec` aliases.
fn deserialize_style<'de, D>(deserializer: D) -> Result<Option<SpecStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StyleVisitor;

    impl Visitor<'_> for StyleVisitor {
        type Value = Option<SpecStyle>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a specification style name")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse::<SpecStyle>().map(Some).map_err(E::custom)
        }
    }

    deserializer.deserialize_str(StyleVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn style_all_spellings() {
        for (input, expected) in [
            ("generic", SpecStyle::Generic),
            ("xunit", SpecStyle::XUnit),
            ("test-unit", SpecStyle::XUnit),
            ("rspec", SpecStyle::RSpec),
            ("tspec", SpecStyle::TSpec),
            ("test-spec", SpecStyle::TSpec),
        ] {
            let toml = format!("[generate]\nstyle = \"{input}\"\n");
            let config = load_config_from_str(&toml).unwrap();
            assert_eq!(config.generate.style, Some(expected));
        }
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = load_config_from_str("").unwrap();
        assert!(config.generate.style.is_none());
        assert!(config.generate.name.is_none());
        assert!(config.generate.output_dir.is_none());
        assert!(config.merge.command.is_none());
    }

    #[test]
    fn unknown_field_rejected() {
        let err = load_config_from_str("[generate]\nflavor = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("flavor"));
    }
}
