//! benchgen: generates multi-file test-bench scaffolding from Verilog module
//! declarations.
//!
//! For every module found in the inputs (named files, or standard input when
//! none are given) six artifacts are written: a runner script, a Verilog
//! bench, a host-language bench, an interface adapter, a prototype and a
//! specification stub. Files edited since they were generated are never
//! overwritten; see `benchgen_writer`.

#![warn(missing_docs)]

mod generate;
mod pipeline;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use benchgen_common::SpecStyle;
use clap::{ArgGroup, Parser, ValueEnum};

/// Environment variable naming the merge tool run after an update.
pub const MERGER_ENV: &str = "MERGER";

/// Generate test benches from Verilog module declarations.
#[derive(Parser, Debug)]
#[command(name = "benchgen", version, about = "Test-bench scaffolding generator")]
#[command(group(ArgGroup::new("spec_style").args(["xunit", "rspec", "tspec", "style"])))]
pub struct Cli {
    /// Files containing module declarations. Standard input is read when
    /// none are given.
    pub files: Vec<PathBuf>,

    /// Use the xUnit (Test::Unit) specification style.
    #[arg(long, visible_alias = "test-unit")]
    pub xunit: bool,

    /// Use the RSpec specification style.
    #[arg(long)]
    pub rspec: bool,

    /// Use the test/spec specification style.
    #[arg(long, visible_alias = "test-spec")]
    pub tspec: bool,

    /// Specification style by name (generic, xunit, rspec, tspec).
    #[arg(long, value_name = "STYLE")]
    pub style: Option<SpecStyle>,

    /// Insert NAME into the names of generated files.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Directory the generated files are written into.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Location of the shared runner template referenced by runner scripts.
    #[arg(long, value_name = "PATH")]
    pub runtime_root: Option<String>,

    /// Merge command invoked as `CMD OLD NEW LIVE` after an update
    /// (overrides `MERGER`).
    #[arg(long, value_name = "CMD")]
    pub merger: Option<String>,

    /// Exit with status 1 if any warning was reported.
    #[arg(long)]
    pub deny_warnings: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `benchgen.toml` configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The style chosen by whichever selector flag was given.
    pub fn selected_style(&self) -> Option<SpecStyle> {
        if self.xunit {
            Some(SpecStyle::XUnit)
        } else if self.rspec {
            Some(SpecStyle::RSpec)
        } else if self.tspec {
            Some(SpecStyle::TSpec)
        } else {
            self.style
        }
    }
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress progress output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config: cli.config.clone(),
    };

    let env_merger = std::env::var(MERGER_ENV).ok();

    match generate::run(&cli, &global, env_merger.as_deref()) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
