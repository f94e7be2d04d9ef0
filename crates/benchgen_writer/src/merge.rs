//! External merge tool invocation.

use std::path::Path;
use std::process::Command;

/// A configured merge command, run as `<program> <args>... OLD NEW LIVE`.
///
/// The command string is split on whitespace; it is not passed through a
/// shell, so quoting is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTool {
    program: String,
    args: Vec<String>,
}

impl MergeTool {
    /// Parses a command string. Returns `None` for a blank command.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// The executable that is run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments placed before the three paths.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Runs the tool and waits for it to exit.
    ///
    /// The tool is responsible for updating `live`. Its exit status is not
    /// interpreted beyond a log message, and a tool that cannot be started is
    /// logged the same way.
    pub fn run(&self, old: &Path, new: &Path, live: &Path) {
        log::debug!(
            "running merge tool `{}` on {}",
            self.program,
            live.display()
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(old)
            .arg(new)
            .arg(live)
            .status();
        match status {
            Ok(status) if status.success() => {}
            Ok(status) => log::warn!(
                "merge tool `{}` exited with {status} for {}",
                self.program,
                live.display()
            ),
            Err(e) => log::warn!("failed to run merge tool `{}`: {e}", self.program),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_program_and_args() {
        let tool = MergeTool::parse("  kdiff3 --auto   -q ").unwrap();
        assert_eq!(tool.program(), "kdiff3");
        assert_eq!(tool.args(), ["--auto".to_string(), "-q".to_string()]);
    }

    #[test]
    fn blank_command_is_absent() {
        assert!(MergeTool::parse("").is_none());
        assert!(MergeTool::parse(" \t ").is_none());
    }

    #[test]
    fn missing_program_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let tool = MergeTool::parse("benchgen-no-such-merge-tool").unwrap();
        tool.run(
            &dir.path().join("a.old"),
            &dir.path().join("a.new"),
            &dir.path().join("a"),
        );
    }
}
