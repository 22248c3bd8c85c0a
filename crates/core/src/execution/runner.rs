//! High-level task runner
//!
//! Executes a plan step by step. Every step blocks until it finishes and the
//! first failure ends the run; nothing is retried or rolled back.

use std::fs;

use colored::*;

use crate::execution::command::CommandRunner;
use crate::execution::plan::{build_plan, Step};
use crate::manifest::stamp_manifest;
use crate::results::RunReport;
use crate::search_index::strip_placeholder;
use crate::tasks::{get_package_color, TaskSelection};
use crate::types::CrateOpsResult;
use crate::workspace::Workspace;

pub struct TaskRunner<'a> {
    workspace: &'a Workspace,
    commands: &'a dyn CommandRunner,
}

impl<'a> TaskRunner<'a> {
    pub fn new(workspace: &'a Workspace, commands: &'a dyn CommandRunner) -> Self {
        Self {
            workspace,
            commands,
        }
    }

    /// Plan and run every selected task
    pub fn run(&self, selection: &TaskSelection) -> CrateOpsResult<RunReport> {
        let plan = build_plan(self.workspace, selection);
        self.execute(&plan)
    }

    /// Run an already built plan in order
    pub fn execute(&self, plan: &[Step]) -> CrateOpsResult<RunReport> {
        let mut report = RunReport::default();
        for step in plan {
            self.execute_step(step, &mut report)?;
        }
        Ok(report)
    }

    fn execute_step(&self, step: &Step, report: &mut RunReport) -> CrateOpsResult<()> {
        match step {
            Step::StampManifest { manifest, version } => {
                println!(
                    "{} {}",
                    "Processing".bold(),
                    self.workspace.relative(manifest).display()
                );
                report.version_lines += stamp_manifest(manifest, version)?;
                report.manifests_stamped += 1;
            }
            Step::Run { target, invocation } => {
                let color = get_package_color(target);
                let label = invocation.verb().map(running_label).unwrap_or("Running");
                println!();
                println!("┌─ {} {}", label.bold(), target.color(color).bold());
                println!("└─ {} {}", "Command:".bright_black(), invocation);

                self.commands.run(invocation)?;
                report.commands_run += 1;

                println!(
                    "{} {}",
                    "✓".green().bold(),
                    format!("Completed for {}", target).color(color)
                );
            }
            Step::RemoveLock { lock, .. } => {
                if lock.exists() {
                    fs::remove_file(lock)?;
                    report.locks_removed += 1;
                    println!(
                        "{} {}",
                        "Removed".bold(),
                        self.workspace.relative(lock).display()
                    );
                }
            }
            Step::StripPlaceholder { index } => {
                println!("{}", "Fixing up the search index".bold());
                report.placeholder_lines += strip_placeholder(index, &self.workspace.placeholder)?;
            }
            Step::CopyStylesheet { from, to } => {
                println!("{}", "Copying new CSS".bold());
                fs::copy(from, to)?;
                report.stylesheets_copied += 1;
            }
        }
        Ok(())
    }
}

fn running_label(verb: &str) -> &'static str {
    match verb {
        "publish" => "Publishing",
        "build" => "Building",
        "test" => "Testing",
        "clean" => "Cleaning",
        "doc" => "Building docs for",
        _ => "Running",
    }
}
