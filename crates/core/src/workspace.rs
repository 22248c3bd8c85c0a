use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::configs::workspace::{parse_workspace_config, WorkspaceConfig};
use crate::configs::WORKSPACE_CONFIG_FILE;
use crate::packages::PackageList;
use crate::types::{CrateOpsError, CrateOpsResult};

pub const DEFAULT_DOC_DIR: &str = "doc";
pub const DEFAULT_EXAMPLES_DIR: &str = "examples";
pub const DEFAULT_CARGO: &str = "cargo";
pub const DEFAULT_SEARCH_INDEX: &str = "target/doc/search-index.js";
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = r"searchIndex\['delete_me'\].*";
pub const DEFAULT_STYLESHEET: &str = "main.css";
pub const DEFAULT_STYLESHEET_TARGET: &str = "target/doc/main.css";

pub const MANIFEST_FILE: &str = "Cargo.toml";
pub const LOCK_FILE: &str = "Cargo.lock";

/// Resolved workspace layout: every default filled in, every path anchored at the root
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub name: Option<String>,
    pub packages: PackageList,
    pub doc_dir: String,
    pub examples_dir: String,
    pub cargo: String,
    pub search_index: String,
    pub placeholder: Regex,
    pub stylesheet: String,
    pub stylesheet_target: String,
}

impl Workspace {
    /// Load the workspace at `root`, reading `crateops.yml` when it exists
    pub fn load(root: impl Into<PathBuf>) -> CrateOpsResult<Self> {
        let root = root.into();
        let config_path = root.join(WORKSPACE_CONFIG_FILE);

        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            parse_workspace_config(&content).map_err(|e| {
                CrateOpsError::Config(format!(
                    "Failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            WorkspaceConfig::default()
        };

        Self::from_config(root, config)
    }

    pub fn from_config(root: PathBuf, config: WorkspaceConfig) -> CrateOpsResult<Self> {
        let pattern = config
            .placeholder_pattern
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER_PATTERN.to_string());
        let placeholder = Regex::new(&pattern).map_err(|e| {
            CrateOpsError::Config(format!("Invalid placeholder pattern '{}': {}", pattern, e))
        })?;

        let packages = config
            .packages
            .map(PackageList::new)
            .unwrap_or_default();

        Ok(Self {
            root,
            name: config.name,
            packages,
            doc_dir: config.doc_dir.unwrap_or_else(|| DEFAULT_DOC_DIR.to_string()),
            examples_dir: config
                .examples_dir
                .unwrap_or_else(|| DEFAULT_EXAMPLES_DIR.to_string()),
            cargo: config.cargo.unwrap_or_else(|| DEFAULT_CARGO.to_string()),
            search_index: config
                .search_index
                .unwrap_or_else(|| DEFAULT_SEARCH_INDEX.to_string()),
            placeholder,
            stylesheet: config
                .stylesheet
                .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string()),
            stylesheet_target: config
                .stylesheet_target
                .unwrap_or_else(|| DEFAULT_STYLESHEET_TARGET.to_string()),
        })
    }

    /// Directory of a package (or of the doc directory) under the root
    pub fn dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn doc_path(&self) -> PathBuf {
        self.dir(&self.doc_dir)
    }

    pub fn examples_path(&self) -> PathBuf {
        self.dir(&self.examples_dir)
    }

    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.dir(name).join(MANIFEST_FILE)
    }

    pub fn lock_path(&self, name: &str) -> PathBuf {
        self.dir(name).join(LOCK_FILE)
    }

    pub fn search_index_path(&self) -> PathBuf {
        self.doc_path().join(&self.search_index)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.doc_path().join(&self.stylesheet)
    }

    pub fn stylesheet_target_path(&self) -> PathBuf {
        self.doc_path().join(&self.stylesheet_target)
    }

    /// Display a path relative to the root when possible
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
