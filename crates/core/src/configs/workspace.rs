use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{CrateOpsError, CrateOpsResult};

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Display name shown in run and plan headers.
    pub name: Option<String>,
    /// Ordered package directories. Replaces the built-in list when present.
    pub packages: Option<Vec<String>>,
    /// Documentation aggregator directory used for build, test and doc.
    pub doc_dir: Option<String>,
    /// Examples directory. Built separately and never tested.
    pub examples_dir: Option<String>,
    /// Program invoked for every external step.
    pub cargo: Option<String>,
    /// Generated search index, relative to the doc directory.
    pub search_index: Option<String>,
    /// Regular expression matching the placeholder search index entry.
    pub placeholder_pattern: Option<String>,
    /// Stylesheet copied into the generated docs, relative to the doc directory.
    pub stylesheet: Option<String>,
    /// Destination of the stylesheet copy, relative to the doc directory.
    pub stylesheet_target: Option<String>,
}

pub fn parse_workspace_config(yaml_str: &str) -> CrateOpsResult<WorkspaceConfig> {
    let config: WorkspaceConfig = serde_yaml::from_str(yaml_str)?;

    if let Some(packages) = &config.packages {
        if packages.iter().all(|p| p.trim().is_empty()) {
            return Err(CrateOpsError::Config(
                "'packages' must name at least one package".to_string(),
            ));
        }
    }

    Ok(config)
}

/// JSON Schema describing `crateops.yml`
pub fn workspace_config_schema() -> CrateOpsResult<String> {
    let schema = schemars::schema_for!(WorkspaceConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| CrateOpsError::Config(format!("Failed to render schema: {}", e)))
}
