// -- imports
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::collect::CollectArgs;
use crate::error::{AppError, Result};
use crate::lister::ListArgs;

// -- config

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ToolConfig {
    pub list: ListArgs,
    pub collect: CollectArgs,
}

impl ToolConfig {
    /// Parse TOML config file with explicit project root for path resolution.
    ///
    /// # Arguments
    ///
    /// * `toml_path` - Path to the TOML config file
    /// * `project_root` - Base directory for resolving relative paths
    ///
    /// # Errors
    ///
    /// Returns `AppError` if:
    /// - The path is not a valid toml file
    /// - File read fails
    /// - TOML parsing fails
    pub fn from_toml(toml_path: &Path, project_root: &Path) -> Result<Self> {
        if !toml_path.is_file() || toml_path.extension().is_none_or(|ext| ext != "toml") {
            return Err(AppError::Config(format!(
                "TOML config path is not a valid .toml file: {:?}",
                toml_path
            )));
        }

        let content = std::fs::read_to_string(toml_path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.resolve_paths(project_root);

        if config.collect.extensions.is_empty() {
            return Err(AppError::Config(
                "[collect] extensions must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// Resolve relative paths against project root, leaving unset ones empty
    fn resolve_paths(&mut self, project_root: &Path) {
        for path in [
            &mut self.list.source_dir,
            &mut self.list.output_file,
            &mut self.collect.root_dir,
            &mut self.collect.output_dir,
        ] {
            resolve(path, project_root);
        }
    }
}

fn resolve(path: &mut PathBuf, project_root: &Path) {
    if !path.as_os_str().is_empty() && !path.is_absolute() {
        *path = project_root.join(&*path);
    }
}

// -- public API

/// Parse TOML config file and return the tool configuration.
///
/// # Errors
///
/// Returns `AppError` if TOML parsing or path resolution fails.
pub fn parse_toml(toml_path: &Path, project_root: &Path) -> Result<ToolConfig> {
    ToolConfig::from_toml(toml_path, project_root)
}

// -- tests
