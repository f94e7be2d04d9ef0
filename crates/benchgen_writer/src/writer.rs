//! The create / skip / update policy for generated files.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File, FileTimes};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::WriteError;
use crate::hasher::FileHasher;
use crate::merge::MergeTool;

/// What [`ArtifactWriter::write`] did with one file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WriteAction {
    /// No file existed; the content was written.
    Create,
    /// The file already holds exactly this content.
    Skip,
    /// The file differs; `.old` and `.new` siblings were written next to
    /// the untouched live file.
    Update,
}

impl WriteAction {
    /// Label used in progress output.
    pub fn as_str(self) -> &'static str {
        match self {
            WriteAction::Create => "create",
            WriteAction::Skip => "skip",
            WriteAction::Update => "update",
        }
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path of the `.old` or `.new` sibling of `path`.
pub fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes artifacts into one output directory without discarding edits made
/// to previously generated files.
pub struct ArtifactWriter {
    output_dir: PathBuf,
    merge_tool: Option<MergeTool>,
}

impl ArtifactWriter {
    /// Creates a writer for `output_dir`. The directory is created on the
    /// first write if missing.
    pub fn new(output_dir: impl Into<PathBuf>, merge_tool: Option<MergeTool>) -> Self {
        Self {
            output_dir: output_dir.into(),
            merge_tool,
        }
    }

    /// Where an artifact named `relative` lands. Paths stay relative when
    /// writing into the current directory.
    pub fn target(&self, relative: &Path) -> PathBuf {
        if self.output_dir.as_os_str().is_empty() || self.output_dir == Path::new(".") {
            relative.to_path_buf()
        } else {
            self.output_dir.join(relative)
        }
    }

    /// Reconciles `content` with the file at `target(relative)`.
    ///
    /// On [`WriteAction::Update`] the `.old` and `.new` siblings are on disk
    /// and the live file is untouched; call [`ArtifactWriter::merge`] to hand
    /// them to the merge tool.
    pub fn write(&self, relative: &Path, content: &str) -> Result<WriteAction, WriteError> {
        let path = self.target(relative);
        let existing = FileHasher::hash_file(&path)?;

        let action = match existing {
            None => {
                self.ensure_parent(&path)?;
                fs::write(&path, content).map_err(|e| WriteError::io(&path, e))?;
                WriteAction::Create
            }
            Some(hash) if hash == FileHasher::hash_content(content) => WriteAction::Skip,
            Some(hash) => {
                log::debug!("{} changed (on disk {hash})", path.display());
                let old = sibling(&path, "old");
                let new = sibling(&path, "new");
                remove_stale(&old)?;
                remove_stale(&new)?;
                copy_preserving(&path, &old)?;
                fs::write(&new, content).map_err(|e| WriteError::io(&new, e))?;
                WriteAction::Update
            }
        };
        log::trace!("{action} {}", path.display());
        Ok(action)
    }

    /// Runs the merge tool, if one is configured, on the siblings left by an
    /// update of `relative`. Blocks until the tool exits.
    pub fn merge(&self, relative: &Path) {
        if let Some(tool) = &self.merge_tool {
            let path = self.target(relative);
            tool.run(&sibling(&path, "old"), &sibling(&path, "new"), &path);
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<(), WriteError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| WriteError::io(parent, e))
            }
            _ => Ok(()),
        }
    }
}

/// Removes a sibling left by an earlier update. A read-only leftover would
/// otherwise block the copy.
fn remove_stale(path: &Path) -> Result<(), WriteError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(WriteError::io(path, e)),
        _ => Ok(()),
    }
}

/// Copies `from` to `to`, keeping permissions and timestamps.
fn copy_preserving(from: &Path, to: &Path) -> Result<(), WriteError> {
    fs::copy(from, to).map_err(|e| WriteError::io(to, e))?;
    let meta = fs::metadata(from).map_err(|e| WriteError::io(from, e))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    // The copy may carry a read-only mode; timestamps only need ownership.
    let file = File::open(to).map_err(|e| WriteError::io(to, e))?;
    file.set_times(times).map_err(|e| WriteError::io(to, e))
}
