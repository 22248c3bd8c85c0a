use anyhow::Result;
use colored::*;
use crateops_core::tasks::TaskSelection;
use crateops_core::workspace_manager::WorkspaceManager;

pub fn execute(manager: &WorkspaceManager, selection: &TaskSelection) -> Result<()> {
    let steps = manager.plan(selection);
    if steps.is_empty() {
        println!("{}", "Nothing to do".dimmed());
        return Ok(());
    }

    match &manager.workspace.name {
        Some(name) => println!("{} {}:", "Execution plan for".bold(), name.cyan()),
        None => println!("{}:", "Execution plan".bold()),
    }
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    Ok(())
}
