use anyhow::{Context, Result};
use colored::*;
use crateops_core::tasks::TaskSelection;
use crateops_core::workspace_manager::WorkspaceManager;

pub fn execute(manager: &WorkspaceManager, selection: &TaskSelection) -> Result<()> {
    let tasks = selection.tasks();
    if tasks.is_empty() {
        println!("{}", "Nothing to do".dimmed());
        return Ok(());
    }

    if let Some(name) = &manager.workspace.name {
        println!("{} {}", "Workspace".bold(), name.cyan());
    }

    let names = tasks
        .iter()
        .map(|task| task.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{} {}", "Running".bold(), names.cyan());

    let report = manager.run(selection).context("Failed to run tasks")?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "All tasks completed successfully!".green().bold()
    );
    println!("  {}", report.to_string().dimmed());

    Ok(())
}
