//! Result types for task runs

use std::fmt;

/// What a completed run changed and executed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub manifests_stamped: usize,
    pub version_lines: usize,
    pub commands_run: usize,
    pub locks_removed: usize,
    pub placeholder_lines: usize,
    pub stylesheets_copied: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} manifests stamped ({} lines), {} commands run, ",
            self.manifests_stamped, self.version_lines, self.commands_run
        )?;
        write!(
            f,
            "{} lock files removed, {} placeholder lines stripped",
            self.locks_removed, self.placeholder_lines
        )?;
        if self.stylesheets_copied > 0 {
            write!(f, ", stylesheet copied")?;
        }
        Ok(())
    }
}
