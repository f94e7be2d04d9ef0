//! Shared pipeline helpers: input loading, diagnostics rendering and
//! progress reporting.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use benchgen_config::{find_config, load_config, FileConfig};
use benchgen_diagnostics::{DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use benchgen_source::SourceDb;
use benchgen_writer::WriteAction;

/// Loads every named input into `source_db`, or standard input when `files`
/// is empty.
pub fn load_inputs(
    files: &[PathBuf],
    source_db: &mut SourceDb,
) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        log::debug!("reading declarations from standard input");
        source_db.load_reader(io::stdin().lock())?;
        return Ok(());
    }
    for path in files {
        source_db
            .load_file(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        log::debug!("loaded {}", path.display());
    }
    Ok(())
}

/// Loads the configuration file given with `--config`, or `benchgen.toml` in
/// `dir` when present.
pub fn load_file_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<Option<FileConfig>, Box<dyn std::error::Error>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config(dir) {
            Some(path) => path,
            None => return Ok(None),
        },
    };
    log::debug!("using configuration {}", path.display());
    let config =
        load_config(&path).map_err(|e| format!("invalid config {}: {e}", path.display()))?;
    Ok(Some(config))
}

/// Renders all diagnostics from a sink to stderr using the terminal renderer.
///
/// Returns the number of diagnostics rendered.
pub fn render_diagnostics(sink: &DiagnosticSink, source_db: &SourceDb, color: bool) -> usize {
    let diagnostics = sink.diagnostics();
    let renderer = TerminalRenderer::new(color, 80);
    for diag in &diagnostics {
        eprintln!("{}", renderer.render(diag, source_db));
    }
    diagnostics.len()
}

/// Writes the one-line-per-event progress report.
pub struct Progress<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> Progress<W> {
    /// Creates a reporter writing to `out`. A quiet reporter prints nothing.
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    fn event(&mut self, kind: &str, subject: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{kind:>8}  {subject}")
    }

    /// Announces a recognized module, preceded by a blank line.
    pub fn module(&mut self, name: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out)?;
        self.event("module", name)
    }

    /// Reports what was done with one file.
    pub fn action(&mut self, action: WriteAction, path: &Path) -> io::Result<()> {
        self.event(action.as_str(), &path.display().to_string())
    }

    /// Returns the underlying writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
