use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use crateops_core::tasks::TaskSelection;
use crateops_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};

mod commands;

/// crateops - run maintenance tasks across a set of crates
#[derive(Parser)]
#[command(name = "crateops")]
#[command(about = "Perform an operation on all crates")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Set the version to VERSION
    #[arg(long, value_name = "VERSION", default_value = "")]
    version: String,

    /// Publish the crates
    #[arg(long)]
    publish: bool,

    /// Build the crates
    #[arg(long)]
    build: bool,

    /// Test the crates
    #[arg(long)]
    test: bool,

    /// Clean the crates
    #[arg(long)]
    clean: bool,

    /// Build the documentation
    #[arg(long)]
    doc: bool,

    /// Show the execution plan without running it
    #[arg(long)]
    dry_run: bool,

    /// Print the JSON Schema of crateops.yml and exit
    #[arg(long)]
    print_schema: bool,
}

impl Cli {
    fn selection(&self) -> TaskSelection {
        TaskSelection {
            version: Some(self.version.clone()).filter(|v| !v.is_empty()),
            publish: self.publish,
            build: self.build,
            test: self.test,
            clean: self.clean,
            doc: self.doc,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.print_schema {
        return commands::schema::execute();
    }

    let manager = WorkspaceManager::new(WorkspaceManagerConfig {
        workspace_root: cli.workspace.clone(),
    })
    .with_context(|| format!("Failed to initialize workspace {}", cli.workspace.display()))?;

    let selection = cli.selection();
    if cli.dry_run {
        commands::plan::execute(&manager, &selection)
    } else {
        commands::run::execute(&manager, &selection)
    }
}
