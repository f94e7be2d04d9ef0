//! Generator configuration: the optional `benchgen.toml` file and the
//! resolved [`GeneratorConfig`] threaded through the pipeline.
//!
//! The binary is the only place that looks at the process environment. It
//! hands the `MERGER` value and its command-line overrides to
//! [`resolve_config`], which produces one explicit configuration value for
//! every component to borrow.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{resolve_config, GeneratorConfig, Overrides};
pub use types::*;
