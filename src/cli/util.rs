//! CLI Helpers

use std::path::PathBuf;

use crate::config::ConfigLoader;
use crate::types::{NavError, Result};

/// Resolve the sidebars file to operate on: an explicit argument wins,
/// otherwise the configured path of an initialized project.
pub fn resolve_sidebars_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => {
            if !ConfigLoader::is_project_initialized() {
                return Err(NavError::NotInitialized);
            }
            Ok(ConfigLoader::load()?.navigation.sidebars_file)
        }
    }
}
