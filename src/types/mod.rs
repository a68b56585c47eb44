pub mod error;

pub use error::{NavError, Result, ShapeError, ShapeIssue};

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Domain Newtypes
// =============================================================================

/// Type-safe wrapper for document identifiers.
///
/// A `DocId` names a content page in the external documentation tree. The
/// crate checks its shape (non-empty) but never resolves it; resolution is
/// the site generator's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod newtype_tests {
    use super::*;

    #[test]
    fn test_doc_id_roundtrips_as_plain_string() {
        let id = DocId::new("understanding-optics");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"understanding-optics\"");

        let back: DocId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_doc_id_display() {
        let id = DocId::from("index");
        assert_eq!(format!("{}", id), "index");
        assert_eq!(id.as_str(), "index");
    }
}
