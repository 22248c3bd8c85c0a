//! High-level workspace management interface
//!
//! [`WorkspaceManager`] is the entry point the CLI uses: it loads the
//! workspace layout once and exposes planning and execution on top of it.
//!
//! ## Example
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
//! let selection = TaskSelection {
//!     build: true,
//!     test: true,
//!     ..TaskSelection::default()
//! };
//!
//! // Show what would run
//! for step in manager.plan(&selection) {
//!     println!("{}", step);
//! }
//!
//! // Run it
//! let report = manager.run(&selection)?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::execution::{build_plan, CommandRunner, ProcessRunner, Step, TaskRunner};
use crate::results::RunReport;
use crate::tasks::TaskSelection;
use crate::types::CrateOpsResult;
use crate::workspace::Workspace;

pub struct WorkspaceManager {
    pub workspace: Workspace,
}

/// Configuration for initializing a workspace manager
pub struct WorkspaceManagerConfig {
    pub workspace_root: PathBuf,
}

impl WorkspaceManager {
    pub fn new(config: WorkspaceManagerConfig) -> CrateOpsResult<Self> {
        let workspace = Workspace::load(config.workspace_root)?;
        Ok(Self { workspace })
    }

    /// Ordered steps for the selection, without running anything
    pub fn plan(&self, selection: &TaskSelection) -> Vec<Step> {
        build_plan(&self.workspace, selection)
    }

    /// Run the selection, spawning real processes
    pub fn run(&self, selection: &TaskSelection) -> CrateOpsResult<RunReport> {
        self.run_with(selection, &ProcessRunner)
    }

    pub fn run_with(
        &self,
        selection: &TaskSelection,
        commands: &dyn CommandRunner,
    ) -> CrateOpsResult<RunReport> {
        TaskRunner::new(&self.workspace, commands).run(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::WORKSPACE_CONFIG_FILE;
    use crate::execution::Invocation;
    use crate::types::CrateOpsError;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Collect(RefCell<Vec<String>>);

    impl CommandRunner for Collect {
        fn run(&self, invocation: &Invocation) -> CrateOpsResult<()> {
            self.0.borrow_mut().push(invocation.to_string());
            Ok(())
        }
    }

    #[test]
    fn loads_config_and_runs_selection() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let config = "packages: [core, extra]\ncargo: my-cargo\n";
        assert!(fs::write(temp_dir.path().join(WORKSPACE_CONFIG_FILE), config).is_ok());

        let manager = WorkspaceManager::new(WorkspaceManagerConfig {
            workspace_root: temp_dir.path().to_path_buf(),
        })
        .expect("manager should load");

        let selection = TaskSelection {
            test: true,
            build: true,
            ..TaskSelection::default()
        };
        assert_eq!(manager.plan(&selection).len(), 4);

        let collect = Collect::default();
        let report = manager
            .run_with(&selection, &collect)
            .expect("run should succeed");

        assert_eq!(report.commands_run, 4);
        assert_eq!(
            collect.0.into_inner(),
            vec![
                "my-cargo build",
                "my-cargo build",
                "my-cargo test -p core",
                "my-cargo test -p extra",
            ]
        );
    }

    #[test]
    fn bad_config_fails_to_load() {
        let temp_dir = tempdir().expect("tempdir should be created");
        assert!(fs::write(
            temp_dir.path().join(WORKSPACE_CONFIG_FILE),
            "placeholderPattern: '('\n"
        )
        .is_ok());

        let result = WorkspaceManager::new(WorkspaceManagerConfig {
            workspace_root: temp_dir.path().to_path_buf(),
        });
        assert!(matches!(result, Err(CrateOpsError::Config(_))));
    }
}
