//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (NavError) for the entire application
//! - Structured shape errors that name the offending sidebar and category
//! - Fail-fast: a malformed navigation tree aborts loading, never degrades

use std::fmt;

use thiserror::Error;

/// Convenience Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NavError>;

// =============================================================================
// Shape Errors
// =============================================================================

/// Structural violation classes for a sidebar collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeIssue {
    /// The collection declares no sidebars at all
    NoSidebars,
    /// Two sidebars share the same name
    DuplicateSidebar,
    /// A category has an empty or whitespace-only label
    EmptyLabel,
    /// A document reference is the empty string
    EmptyDocId,
    /// A category link points at the empty string
    EmptyLink,
}

impl ShapeIssue {
    fn message(self) -> &'static str {
        match self {
            Self::NoSidebars => "no sidebars defined; at least one is required",
            Self::DuplicateSidebar => "duplicate sidebar name",
            Self::EmptyLabel => "category label must not be empty",
            Self::EmptyDocId => "document reference must not be empty",
            Self::EmptyLink => "category link must not be empty",
        }
    }
}

/// A structural violation in a sidebar collection.
///
/// Carries the sidebar name and the category breadcrumb down to the
/// offending node so build failures point at the exact spot in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    pub issue: ShapeIssue,
    /// Name of the sidebar containing the violation, when known
    pub sidebar: Option<String>,
    /// Category labels from the sidebar root down to the offending node
    pub path: Vec<String>,
}

impl ShapeError {
    pub fn no_sidebars() -> Self {
        Self {
            issue: ShapeIssue::NoSidebars,
            sidebar: None,
            path: Vec::new(),
        }
    }

    pub fn duplicate_sidebar(name: impl Into<String>) -> Self {
        Self {
            issue: ShapeIssue::DuplicateSidebar,
            sidebar: Some(name.into()),
            path: Vec::new(),
        }
    }

    pub fn at(issue: ShapeIssue, sidebar: impl Into<String>, path: &[String]) -> Self {
        Self {
            issue,
            sidebar: Some(sidebar.into()),
            path: path.to_vec(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.issue.message())?;
        if let Some(sidebar) = &self.sidebar {
            write!(f, " in sidebar `{}`", sidebar)?;
        }
        if !self.path.is_empty() {
            write!(f, " at category `{}`", self.path.join(" > "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ShapeError {}

// =============================================================================
// Unified Error
// =============================================================================

/// Unified application error
#[derive(Debug, Error)]
pub enum NavError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Structural violation in a sidebar collection
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Sidebars file has an extension no parser is registered for
    #[error("unsupported sidebars format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("not initialized: run 'docnav init' first")]
    NotInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_names_sidebar_and_category() {
        let err = ShapeError::at(
            ShapeIssue::EmptyLabel,
            "docs",
            &["Guides".to_string(), "Advanced".to_string()],
        );
        let rendered = err.to_string();
        assert!(rendered.contains("`docs`"));
        assert!(rendered.contains("Guides > Advanced"));
    }

    #[test]
    fn test_duplicate_sidebar_display() {
        let err = ShapeError::duplicate_sidebar("sidebar");
        assert_eq!(
            err.to_string(),
            "duplicate sidebar name in sidebar `sidebar`"
        );
    }
}
