//! Sidebar Navigation Model
//!
//! Typed representation, loading and shape validation for the site's
//! sidebar tree. Values are loaded once per build and never mutated.

mod loader;
mod model;
pub(crate) mod validate;

pub use loader::SidebarLoader;
pub use model::{Category, SidebarEntry, Sidebars};
