//! Sidebars File Loader
//!
//! Reads a sidebar collection from disk, picking the parser from the file
//! extension, and shape-checks it before handing it out. Any violation
//! aborts the load; there is no partial or default fallback.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::model::Sidebars;
use crate::constants::formats;
use crate::types::{NavError, Result};

/// Loads and saves sidebar collections
pub struct SidebarLoader;

impl SidebarLoader {
    /// Load a validated collection from a JSON or YAML file
    pub fn load(path: &Path) -> Result<Sidebars> {
        debug!("Loading sidebars from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let sidebars = Self::parse(path, &content)?;
        sidebars.validate()?;
        Ok(sidebars)
    }

    /// Write a collection back out, format chosen by extension.
    /// The value is validated first so a malformed tree never hits disk.
    pub fn save(sidebars: &Sidebars, path: &Path) -> Result<()> {
        sidebars.validate()?;

        let content = match extension(path) {
            Some(ext) if formats::JSON_EXTENSIONS.contains(&ext.as_str()) => {
                let mut out = serde_json::to_string_pretty(sidebars)?;
                out.push('\n');
                out
            }
            Some(ext) if formats::YAML_EXTENSIONS.contains(&ext.as_str()) => {
                serde_yaml::to_string(sidebars)?
            }
            _ => {
                return Err(NavError::UnsupportedFormat {
                    path: path.display().to_string(),
                });
            }
        };

        fs::write(path, content)?;
        debug!("Saved sidebars to: {}", path.display());
        Ok(())
    }

    fn parse(path: &Path, content: &str) -> Result<Sidebars> {
        match extension(path) {
            Some(ext) if formats::JSON_EXTENSIONS.contains(&ext.as_str()) => {
                Ok(serde_json::from_str(content)?)
            }
            Some(ext) if formats::YAML_EXTENSIONS.contains(&ext.as_str()) => {
                Ok(serde_yaml::from_str(content)?)
            }
            _ => Err(NavError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}
