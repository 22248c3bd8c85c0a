//! Command execution utilities
//!
//! External steps are described as an [`Invocation`] and handed to a
//! [`CommandRunner`]. [`ProcessRunner`] spawns the real process; tests plug in
//! their own runner to record what would have been run.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use crate::types::{CrateOpsError, CrateOpsResult};

/// A single external command and the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub dir: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: &[&str], dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            dir: dir.into(),
        }
    }

    /// First argument, e.g. `publish` for `cargo publish`
    pub fn verb(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external commands to completion
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> CrateOpsResult<()>;
}

/// Spawns each invocation as a child process and waits for it
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> CrateOpsResult<()> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.dir)
            .status()
            .map_err(|e| CrateOpsError::Command {
                command: invocation.to_string(),
                dir: invocation.dir.clone(),
                code: None,
                outcome: format!("could not be started: {}", e),
            })?;

        if !status.success() {
            let outcome = match status.code() {
                Some(code) => format!("failed with exit code {}", code),
                None => "was terminated by a signal".to_string(),
            };
            return Err(CrateOpsError::Command {
                command: invocation.to_string(),
                dir: invocation.dir.clone(),
                code: status.code(),
                outcome,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn displays_program_and_args() {
        let invocation = Invocation::new("cargo", &["test", "-p", "allegro"], "doc");
        assert_eq!(invocation.to_string(), "cargo test -p allegro");
        assert_eq!(invocation.verb(), Some("test"));
    }

    #[test]
    fn missing_program_cannot_be_started() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let invocation = Invocation::new("crateops-no-such-program", &["build"], temp_dir.path());

        match ProcessRunner.run(&invocation) {
            Err(CrateOpsError::Command { outcome, code, .. }) => {
                assert!(outcome.starts_with("could not be started"));
                assert_eq!(code, None);
            }
            other => panic!("expected command error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported_with_its_code() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let invocation = Invocation::new("sh", &["-c", "exit 3"], temp_dir.path());

        match ProcessRunner.run(&invocation) {
            Err(CrateOpsError::Command {
                outcome, dir, code, ..
            }) => {
                assert_eq!(code, Some(3));
                assert_eq!(outcome, "failed with exit code 3");
                assert_eq!(dir, temp_dir.path());
            }
            other => panic!("expected command error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_the_given_directory() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let invocation = Invocation::new("sh", &["-c", "touch ran-here"], temp_dir.path());

        assert!(ProcessRunner.run(&invocation).is_ok());
        assert!(temp_dir.path().join("ran-here").exists());
    }
}
