//! Execution planning
//!
//! Expands a [`TaskSelection`] into the ordered list of [`Step`]s the runner
//! executes. Planning never touches the filesystem.

use std::fmt;
use std::path::PathBuf;

use crate::execution::command::Invocation;
use crate::tasks::{Task, TaskSelection};
use crate::workspace::Workspace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Rewrite the marked version lines of a manifest
    StampManifest {
        manifest: PathBuf,
        version: String,
    },
    /// Run an external command on behalf of a package or directory
    Run {
        target: String,
        invocation: Invocation,
    },
    /// Delete a lock file if it exists when the step runs
    RemoveLock {
        target: String,
        lock: PathBuf,
    },
    /// Strip the placeholder entry from the generated search index
    StripPlaceholder { index: PathBuf },
    /// Copy the custom stylesheet over the generated one
    CopyStylesheet {
        from: PathBuf,
        to: PathBuf,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::StampManifest { manifest, version } => {
                write!(f, "stamp version {} into {}", version, manifest.display())
            }
            Step::Run { invocation, .. } => {
                write!(f, "{} (in {})", invocation, invocation.dir.display())
            }
            Step::RemoveLock { lock, .. } => write!(f, "remove {} if present", lock.display()),
            Step::StripPlaceholder { index } => {
                write!(f, "strip placeholder entry from {}", index.display())
            }
            Step::CopyStylesheet { from, to } => {
                write!(f, "copy {} to {}", from.display(), to.display())
            }
        }
    }
}

/// Build the ordered plan for every selected task
pub fn build_plan(workspace: &Workspace, selection: &TaskSelection) -> Vec<Step> {
    let mut steps = Vec::new();
    for task in selection.tasks() {
        steps.extend(plan_task(workspace, &task));
    }
    steps
}

/// Steps for a single task
pub fn plan_task(workspace: &Workspace, task: &Task) -> Vec<Step> {
    let cargo = workspace.cargo.as_str();
    let doc_dir = workspace.doc_dir.as_str();

    match task {
        Task::Version(version) => workspace
            .packages
            .with_leading(doc_dir)
            .map(|name| Step::StampManifest {
                manifest: workspace.manifest_path(name),
                version: version.clone(),
            })
            .collect(),
        Task::Publish => workspace
            .packages
            .iter()
            .map(|name| Step::Run {
                target: name.to_string(),
                invocation: Invocation::new(cargo, &["publish"], workspace.dir(name)),
            })
            .collect(),
        Task::Build => vec![
            Step::Run {
                target: workspace.doc_dir.clone(),
                invocation: Invocation::new(cargo, &["build"], workspace.doc_path()),
            },
            Step::Run {
                target: workspace.examples_dir.clone(),
                invocation: Invocation::new(cargo, &["build"], workspace.examples_path()),
            },
        ],
        Task::Test => workspace
            .packages
            .without(&workspace.examples_dir)
            .map(|name| Step::Run {
                target: name.to_string(),
                invocation: Invocation::new(cargo, &["test", "-p", name], workspace.doc_path()),
            })
            .collect(),
        Task::Clean => workspace
            .packages
            .with_leading(doc_dir)
            .flat_map(|name| {
                [
                    Step::RemoveLock {
                        target: name.to_string(),
                        lock: workspace.lock_path(name),
                    },
                    Step::Run {
                        target: name.to_string(),
                        invocation: Invocation::new(cargo, &["clean"], workspace.dir(name)),
                    },
                ]
            })
            .collect(),
        Task::Doc => vec![
            Step::Run {
                target: workspace.doc_dir.clone(),
                invocation: Invocation::new(cargo, &["doc"], workspace.doc_path()),
            },
            Step::StripPlaceholder {
                index: workspace.search_index_path(),
            },
            Step::CopyStylesheet {
                from: workspace.stylesheet_path(),
                to: workspace.stylesheet_target_path(),
            },
        ],
    }
}
