//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/docnav/config.toml)
//! 3. Project config (.docnav/config.toml)
//! 4. Environment variables (DOCNAV_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
