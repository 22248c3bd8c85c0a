//! Configuration parsing for the optional `crateops.yml` workspace file

pub mod workspace;

/// File name looked up at the workspace root
pub const WORKSPACE_CONFIG_FILE: &str = "crateops.yml";
