//! The generator run: scan inputs, resolve names, render and write artifacts.
//!
//! 1. Resolve the configuration (flags, `MERGER`, `benchgen.toml`, defaults)
//! 2. Load inputs into the source database
//! 3. Recognize module declarations, reporting skipped ones
//! 4. For each module, render the six artifacts and reconcile them on disk

use std::fmt;
use std::io::Write;
use std::path::Path;

use benchgen_config::{resolve_config, GeneratorConfig, Overrides};
use benchgen_diagnostics::DiagnosticSink;
use benchgen_gen::{render_all, OutputDescriptor};
use benchgen_parser::{parse_all, RecognizedModule};
use benchgen_source::SourceDb;
use benchgen_writer::{ArtifactWriter, MergeTool, WriteAction};

use crate::pipeline::{load_file_config, load_inputs, render_diagnostics, Progress};
use crate::{Cli, GlobalArgs};

/// Counts of what a run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Modules processed.
    pub modules: usize,
    /// Files created.
    pub created: usize,
    /// Files updated (`.old`/`.new` written).
    pub updated: usize,
    /// Files already up to date.
    pub skipped: usize,
}

impl Summary {
    fn record(&mut self, action: WriteAction) {
        match action {
            WriteAction::Create => self.created += 1,
            WriteAction::Update => self.updated += 1,
            WriteAction::Skip => self.skipped += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} module(s): {} created, {} updated, {} skipped",
            self.modules, self.created, self.updated, self.skipped
        )
    }
}

/// Runs the generator.
///
/// Returns exit code 0 on success, 1 if errors were reported. With
/// `--deny-warnings` every warning is reported as an error.
pub fn run(
    cli: &Cli,
    global: &GlobalArgs,
    env_merger: Option<&str>,
) -> Result<i32, Box<dyn std::error::Error>> {
    // Step 1: Configuration
    let file_config = load_file_config(global.config.as_deref(), Path::new("."))?;
    let overrides = Overrides {
        style: cli.selected_style(),
        test_name: cli.name.clone(),
        output_dir: cli.output_dir.clone(),
        runtime_root: cli.runtime_root.clone(),
        merge_command: cli.merger.clone(),
    };
    let config = resolve_config(file_config.as_ref(), &overrides, env_merger)?;
    log::debug!("{config:?}");

    // Step 2: Inputs
    let mut source_db = SourceDb::new();
    load_inputs(&cli.files, &mut source_db)?;

    // Step 3: Recognize declarations
    let sink = if cli.deny_warnings {
        DiagnosticSink::denying_warnings()
    } else {
        DiagnosticSink::new()
    };
    let modules = parse_all(&source_db, &sink);
    render_diagnostics(&sink, &source_db, global.color);

    // Step 4: Render and write
    let stdout = std::io::stdout();
    let mut progress = Progress::new(stdout.lock(), global.quiet);
    let summary = generate(&modules, &config, &mut progress)?;

    if !global.quiet {
        eprintln!("{summary}");
        if sink.error_count() + sink.warning_count() > 0 {
            eprintln!(
                "   Result: {} error(s), {} warning(s)",
                sink.error_count(),
                sink.warning_count()
            );
        }
    }

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Renders and writes the artifacts of every module, in order.
///
/// Stops at the first filesystem error; files already written stay on disk.
pub fn generate<W: Write>(
    modules: &[RecognizedModule],
    config: &GeneratorConfig,
    progress: &mut Progress<W>,
) -> Result<Summary, Box<dyn std::error::Error>> {
    let merge_tool = config.merge_command.as_deref().and_then(MergeTool::parse);
    let writer = ArtifactWriter::new(&config.output_dir, merge_tool);
    let mut summary = Summary::default();

    for recognized in modules {
        let module = &recognized.module;
        progress.module(module.name())?;

        let output = OutputDescriptor::resolve(module.name(), &config.test_name, config.style)
            .with_runtime_root(&config.runtime_root);

        for artifact in render_all(module, &output) {
            let action = writer.write(&artifact.path, &artifact.content)?;
            progress.action(action, &writer.target(&artifact.path))?;
            if action == WriteAction::Update {
                writer.merge(&artifact.path);
            }
            summary.record(action);
        }
        summary.modules += 1;
    }
    Ok(summary)
}
