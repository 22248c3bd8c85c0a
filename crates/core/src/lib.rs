//! crateops Core Library
//!
//! Runs maintenance tasks (version stamping, publish, build, test, clean and
//! documentation) across an ordered list of related crates by driving `cargo`
//! once per package.
//!
//! ## Architecture
//!
//! - [`workspace_manager`] - High-level interface used by the CLI
//! - [`workspace`] - Workspace layout resolved from defaults and `crateops.yml`
//! - [`configs`] - Configuration file parsing
//! - [`packages`] - The ordered package list
//! - [`tasks`] - Task selection and fixed task ordering
//! - [`execution`] - Plan construction and sequential step execution
//! - [`manifest`] - Version stamping of `Cargo.toml` files
//! - [`search_index`] - Search index post-processing for generated docs
//! - [`results`] - Run reports
//! - [`types`] - Error type and result alias
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crateops_core::tasks::TaskSelection;
//! use crateops_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> crateops_core::types::CrateOpsResult<()> {
//! let manager = WorkspaceManager::new(WorkspaceManagerConfig {
//!     workspace_root: PathBuf::from("."),
//! })?;
//!
//! manager.run(&TaskSelection {
//!     version: Some("0.2.0".to_string()),
//!     ..TaskSelection::default()
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod manifest;
pub mod packages;
pub mod results;
pub mod search_index;
pub mod tasks;
pub mod types;
pub mod workspace;
pub mod workspace_manager;

pub use types::{CrateOpsError, CrateOpsResult};
pub use workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
