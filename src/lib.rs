//! docnav - Typed Sidebar Navigation for Documentation Sites
//!
//! A typed, validated representation of a documentation website's sidebar
//! navigation: a named collection of sidebars, each an ordered tree of
//! categories and document references. The structure is loaded once per
//! build, shape-checked fail-fast, and handed unmodified to the external
//! site generator. Document references are identifiers only; resolving
//! them against the content tree is the generator's job.
//!
//! ## Quick Start
//!
//! ```ignore
//! use docnav::{Category, SidebarLoader, Sidebars};
//!
//! let mut sidebars = Sidebars::new();
//! sidebars.insert(
//!     "sidebar",
//!     vec![
//!         Category::new("Guides")
//!             .collapsed(false)
//!             .link("index")
//!             .doc("getting-started")
//!             .into(),
//!     ],
//! )?;
//! sidebars.validate()?;
//! SidebarLoader::save(&sidebars, "sidebars.json".as_ref())?;
//! ```
//!
//! ## Modules
//!
//! - [`sidebar`]: the navigation model, file loader and shape validation
//! - [`config`]: tool configuration with hierarchical resolution
//! - [`types`]: domain newtypes and the unified error type
//! - [`cli`]: command implementations for the `docnav` binary

pub mod cli;
pub mod config;
pub mod constants;
pub mod sidebar;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Navigation model
pub use sidebar::{Category, SidebarEntry, SidebarLoader, Sidebars};

// Configuration
pub use config::{Config, ConfigLoader, NavigationConfig, SiteConfig};

// Error types
pub use types::{DocId, NavError, Result, ShapeError, ShapeIssue};
