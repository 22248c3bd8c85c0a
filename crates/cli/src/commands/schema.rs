use anyhow::Result;
use crateops_core::configs::workspace::workspace_config_schema;

pub fn execute() -> Result<()> {
    println!("{}", workspace_config_schema()?);
    Ok(())
}
