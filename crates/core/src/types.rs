use std::path::PathBuf;

use thiserror::Error;

/// The main error type for crateops operations
#[derive(Debug, Error)]
pub enum CrateOpsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest '{}' not found", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Couldn't find the placeholder line in '{}'", .0.display())]
    PlaceholderNotFound(PathBuf),

    #[error("Command '{command}' in '{}' {outcome}", dir.display())]
    Command {
        command: String,
        dir: PathBuf,
        /// Exit code, when the process ran and exited normally
        code: Option<i32>,
        outcome: String,
    },
}

/// Result type alias for crateops operations
pub type CrateOpsResult<T> = Result<T, CrateOpsError>;
