//! Resolution of file settings, command-line overrides and the merge
//! command into one [`GeneratorConfig`].

use crate::error::ConfigError;
use crate::types::FileConfig;
use benchgen_common::SpecStyle;
use std::path::PathBuf;

/// Test identifier used when none is configured.
pub const DEFAULT_TEST_NAME: &str = "test";

/// Runner template location used when none is configured.
pub const DEFAULT_RUNTIME_ROOT: &str = "ruby-vpi";

/// The explicit configuration of one generator run.
///
/// Built once by the binary and passed by reference to every stage; no
/// stage consults the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Specification style of the generated bench.
    pub style: SpecStyle,
    /// Test identifier inserted into every derived name.
    pub test_name: String,
    /// Directory artifacts are written into.
    pub output_dir: PathBuf,
    /// Location of the shared runner template referenced by runners.
    pub runtime_root: String,
    /// Merge tool invoked after an update, if any.
    pub merge_command: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            style: SpecStyle::default(),
            test_name: DEFAULT_TEST_NAME.to_string(),
            output_dir: PathBuf::from("."),
            runtime_root: DEFAULT_RUNTIME_ROOT.to_string(),
            merge_command: None,
        }
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// `--xunit`, `--rspec`, `--tspec` or `--style`.
    pub style: Option<SpecStyle>,
    /// `--name`.
    pub test_name: Option<String>,
    /// `--output-dir`.
    pub output_dir: Option<PathBuf>,
    /// `--runtime-root`.
    pub runtime_root: Option<String>,
    /// `--merger`.
    pub merge_command: Option<String>,
}

/// Merges the configuration sources, highest precedence first: command-line
/// overrides, the `MERGER` environment value (merge command only), the
/// configuration file, built-in defaults.
pub fn resolve_config(
    file: Option<&FileConfig>,
    overrides: &Overrides,
    env_merger: Option<&str>,
) -> Result<GeneratorConfig, ConfigError> {
    let defaults = GeneratorConfig::default();
    let generate = file.map(|f| &f.generate);

    let style = overrides
        .style
        .or_else(|| generate.and_then(|g| g.style))
        .unwrap_or(defaults.style);

    let test_name = overrides
        .test_name
        .clone()
        .or_else(|| generate.and_then(|g| g.name.clone()))
        .unwrap_or(defaults.test_name);
    validate_test_name(&test_name)?;

    let output_dir = overrides
        .output_dir
        .clone()
        .or_else(|| generate.and_then(|g| g.output_dir.as_ref().map(PathBuf::from)))
        .unwrap_or(defaults.output_dir);

    let runtime_root = overrides
        .runtime_root
        .clone()
        .or_else(|| generate.and_then(|g| g.runtime_root.clone()))
        .unwrap_or(defaults.runtime_root);
    reject_quotes("runtime root", &runtime_root)?;

    let merge_command = non_blank(overrides.merge_command.as_deref())
        .or_else(|| non_blank(env_merger))
        .or_else(|| non_blank(file.and_then(|f| f.merge.command.as_deref())));

    Ok(GeneratorConfig {
        style,
        test_name,
        output_dir,
        runtime_root,
        merge_command,
    })
}

/// Rejects test identifiers that cannot appear in a file name or inside the
/// quoted literals of the generated files.
pub(crate) fn validate_test_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "test name is empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) {
        return Err(ConfigError::ValidationError(format!(
            "test name '{name}' contains a path separator"
        )));
    }
    reject_quotes("test name", name)
}

fn reject_quotes(what: &str, value: &str) -> Result<(), ConfigError> {
    if value.contains(['\'', '"']) {
        return Err(ConfigError::ValidationError(format!(
            "{what} {value:?} contains a quote character"
        )));
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn defaults_without_sources() {
        let config = resolve_config(None, &Overrides::default(), None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.test_name, "test");
        assert_eq!(config.style, SpecStyle::Generic);
        assert!(config.merge_command.is_none());
    }

    #[test]
    fn file_values_apply() {
        let file = load_config_from_str(
            "[generate]\nstyle = \"xunit\"\nname = \"smoke\"\noutput_dir = \"bench\"\n",
        )
        .unwrap();
        let config = resolve_config(Some(&file), &Overrides::default(), None).unwrap();
        assert_eq!(config.style, SpecStyle::XUnit);
        assert_eq!(config.test_name, "smoke");
        assert_eq!(config.output_dir, PathBuf::from("bench"));
        assert_eq!(config.runtime_root, DEFAULT_RUNTIME_ROOT);
    }

    #[test]
    fn overrides_beat_file() {
        let file = load_config_from_str("[generate]\nstyle = \"xunit\"\nname = \"smoke\"\n").unwrap();
        let overrides = Overrides {
            style: Some(SpecStyle::RSpec),
            test_name: Some("regress".to_string()),
            ..Overrides::default()
        };
        let config = resolve_config(Some(&file), &overrides, None).unwrap();
        assert_eq!(config.style, SpecStyle::RSpec);
        assert_eq!(config.test_name, "regress");
    }

    #[test]
    fn merge_command_precedence() {
        let file = load_config_from_str("[merge]\ncommand = \"from-file\"\n").unwrap();

        let config = resolve_config(Some(&file), &Overrides::default(), None).unwrap();
        assert_eq!(config.merge_command.as_deref(), Some("from-file"));

        let config = resolve_config(Some(&file), &Overrides::default(), Some("from-env")).unwrap();
        assert_eq!(config.merge_command.as_deref(), Some("from-env"));

        let overrides = Overrides {
            merge_command: Some("from-flag".to_string()),
            ..Overrides::default()
        };
        let config = resolve_config(Some(&file), &overrides, Some("from-env")).unwrap();
        assert_eq!(config.merge_command.as_deref(), Some("from-flag"));
    }

    #[test]
    fn blank_merge_command_is_absent() {
        let config = resolve_config(None, &Overrides::default(), Some("   ")).unwrap();
        assert!(config.merge_command.is_none());
    }

    #[test]
    fn invalid_test_names_rejected() {
        for bad in ["", "  ", "a/b", "a\\b", "it's", "say\"hi\""] {
            let overrides = Overrides {
                test_name: Some(bad.to_string()),
                ..Overrides::default()
            };
            let err = resolve_config(None, &overrides, None).unwrap_err();
            assert!(matches!(err, ConfigError::ValidationError(_)), "{bad:?}");
        }
    }

    #[test]
    fn quoted_runtime_root_rejected() {
        let overrides = Overrides {
            runtime_root: Some("/opt/o'brien/ruby-vpi".to_string()),
            ..Overrides::default()
        };
        let err = resolve_config(None, &overrides, None).unwrap_err();
        assert!(err.to_string().contains("quote"));
    }
}
