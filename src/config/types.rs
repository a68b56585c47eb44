//! Configuration Types
//!
//! Tool-level configuration with sensible defaults. Supports global
//! (~/.config/docnav/) and project (.docnav/) level configuration. This is
//! the tool's own config; the sidebar collection itself lives in the
//! sidebars file it points at.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{files, formats};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Site-level settings
    pub site: SiteConfig,

    /// Navigation settings
    pub navigation: NavigationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            site: SiteConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `NavError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.version.trim().is_empty() {
            return Err(crate::types::NavError::Config(
                "version must not be empty".to_string(),
            ));
        }

        let supported = self
            .navigation
            .sidebars_file
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| {
                formats::JSON_EXTENSIONS.contains(&ext.as_str())
                    || formats::YAML_EXTENSIONS.contains(&ext.as_str())
            });
        if !supported {
            return Err(crate::types::NavError::Config(format!(
                "navigation.sidebars_file must end in .json, .yaml or .yml, got {}",
                self.navigation.sidebars_file.display()
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Site Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name (defaults to directory name at init time)
    pub name: Option<String>,

    /// Directory holding the content pages that document references
    /// resolve against. Resolution itself happens in the site generator.
    pub docs_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: None,
            docs_dir: PathBuf::from("docs"),
        }
    }
}

// =============================================================================
// Navigation Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Sidebars file, relative to the project root
    pub sidebars_file: PathBuf,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            sidebars_file: PathBuf::from(files::DEFAULT_SIDEBARS_FILE),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.site.docs_dir, PathBuf::from("docs"));
        assert_eq!(
            config.navigation.sidebars_file,
            PathBuf::from("sidebars.json")
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_unsupported_sidebars_extension_rejected() {
        let config = Config {
            navigation: NavigationConfig {
                sidebars_file: PathBuf::from("sidebars.js"),
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_sidebars_file_accepted() {
        let config = Config {
            navigation: NavigationConfig {
                sidebars_file: PathBuf::from("nav/sidebars.yml"),
            },
            ..Config::default()
        };
        config.validate().unwrap();
    }
}
