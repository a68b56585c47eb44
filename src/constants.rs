//! Global Constants
//!
//! Centralized constants for file names and formats.

/// Project layout constants
pub mod files {
    /// Project data directory
    pub const PROJECT_DIR: &str = ".docnav";

    /// Tool config file name inside the project directory
    pub const CONFIG_FILE: &str = "config.toml";

    /// Default sidebars file written by `docnav init`
    pub const DEFAULT_SIDEBARS_FILE: &str = "sidebars.json";
}

/// Sidebars file format constants
pub mod formats {
    /// Extensions parsed as JSON
    pub const JSON_EXTENSIONS: &[&str] = &["json"];

    /// Extensions parsed as YAML
    pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
}
