//! Sidebar Data Model
//!
//! The typed representation of a documentation site's navigation: a named
//! collection of sidebars, each an ordered tree of categories and document
//! references. Values are built once (from a file or in code), validated,
//! and read-only from then on.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{DocId, ShapeError};

// =============================================================================
// Entries
// =============================================================================

/// One node in a sidebar tree.
///
/// In the serialized form a plain string is a document reference and an
/// object is a category, so the enum is untagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Leaf reference to a content page
    Doc(DocId),
    /// Collapsible grouping with ordered children
    Category(Category),
}

impl SidebarEntry {
    pub fn doc(id: impl Into<DocId>) -> Self {
        Self::Doc(id.into())
    }

    pub fn is_doc(&self) -> bool {
        matches!(self, Self::Doc(_))
    }
}

impl From<Category> for SidebarEntry {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

/// A collapsible grouping node in the sidebar tree.
///
/// `items` order is the displayed order and is preserved exactly. `link`
/// optionally names the category's landing page. Omitted `collapsed`
/// defaults to true, matching how generators render unmarked categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,

    #[serde(default = "default_collapsed")]
    pub collapsed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<DocId>,

    /// Ordered children; required in the serialized form
    pub items: Vec<SidebarEntry>,
}

fn default_collapsed() -> bool {
    true
}

impl Category {
    /// Create an empty collapsed category with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            collapsed: true,
            link: None,
            items: Vec::new(),
        }
    }

    /// Set the initial expand/collapse state
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Set the landing page document
    pub fn link(mut self, id: impl Into<DocId>) -> Self {
        self.link = Some(id.into());
        self
    }

    /// Append a document reference child
    pub fn doc(mut self, id: impl Into<DocId>) -> Self {
        self.items.push(SidebarEntry::Doc(id.into()));
        self
    }

    /// Append a nested category child
    pub fn category(mut self, category: Category) -> Self {
        self.items.push(SidebarEntry::Category(category));
        self
    }
}

// =============================================================================
// Collection
// =============================================================================

/// Ordered mapping from sidebar name to its entry list.
///
/// Names are unique; inserting a duplicate fails with a [`ShapeError`], and
/// the same check runs during deserialization (a plain map type would let
/// the later key silently win). Declaration order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebars {
    sidebars: Vec<(String, Vec<SidebarEntry>)>,
}

impl Sidebars {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in starter collection written by `docnav init`: one sidebar
    /// with a single expanded category over the optics guide pages.
    pub fn starter() -> Self {
        let optics = Category::new("ZIO Optics")
            .collapsed(false)
            .link("index")
            .doc("understanding-optics")
            .doc("constructing-optics")
            .doc("composing-optics")
            .doc("using-optics")
            .doc("effectual-optics");

        Self {
            sidebars: vec![("sidebar".to_string(), vec![optics.into()])],
        }
    }

    /// Add a named sidebar. Fails if the name is already taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        items: Vec<SidebarEntry>,
    ) -> Result<(), ShapeError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ShapeError::duplicate_sidebar(name));
        }
        self.sidebars.push((name, items));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sidebars.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&[SidebarEntry]> {
        self.sidebars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, items)| items.as_slice())
    }

    /// Iterate sidebars in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarEntry])> {
        self.sidebars
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Shape-check the whole collection: non-empty, valid labels and
    /// document references throughout the tree.
    pub fn validate(&self) -> Result<(), ShapeError> {
        super::validate::validate(self)
    }
}

impl Serialize for Sidebars {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.sidebars.len()))?;
        for (name, items) in &self.sidebars {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Sidebars {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SidebarsVisitor;

        impl<'de> Visitor<'de> for SidebarsVisitor {
            type Value = Sidebars;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from sidebar name to an entry list")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sidebars = Sidebars::new();
                while let Some((name, items)) =
                    access.next_entry::<String, Vec<SidebarEntry>>()?
                {
                    sidebars
                        .insert(name, items)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(sidebars)
            }
        }

        deserializer.deserialize_map(SidebarsVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeIssue;

    #[test]
    fn test_starter_collection_shape() {
        let sidebars = Sidebars::starter();
        assert_eq!(sidebars.len(), 1);

        let entries = sidebars.get("sidebar").unwrap();
        assert_eq!(entries.len(), 1);

        let SidebarEntry::Category(category) = &entries[0] else {
            panic!("starter root entry should be a category");
        };
        assert_eq!(category.label, "ZIO Optics");
        assert!(!category.collapsed);
        assert_eq!(category.link.as_ref().unwrap().as_str(), "index");

        let ids: Vec<&str> = category
            .items
            .iter()
            .map(|entry| match entry {
                SidebarEntry::Doc(id) => id.as_str(),
                SidebarEntry::Category(c) => panic!("unexpected category {}", c.label),
            })
            .collect();
        assert_eq!(
            ids,
            vec![
                "understanding-optics",
                "constructing-optics",
                "composing-optics",
                "using-optics",
                "effectual-optics",
            ]
        );
    }

    #[test]
    fn test_duplicate_name_rejected_on_insert() {
        let mut sidebars = Sidebars::new();
        sidebars.insert("docs", vec![SidebarEntry::doc("a")]).unwrap();

        let err = sidebars
            .insert("docs", vec![SidebarEntry::doc("b")])
            .unwrap_err();
        assert_eq!(err.issue, ShapeIssue::DuplicateSidebar);
        assert_eq!(err.sidebar.as_deref(), Some("docs"));
    }

    #[test]
    fn test_duplicate_name_rejected_on_deserialize() {
        // serde_json keeps both keys during map access, so the visitor sees
        // the duplicate instead of a silently merged map
        let raw = r#"{"docs": ["a"], "docs": ["b"]}"#;
        let err = serde_json::from_str::<Sidebars>(raw).unwrap_err();
        assert!(err.to_string().contains("duplicate sidebar"));
    }

    #[test]
    fn test_entry_order_preserved() {
        let raw = r#"{"docs": ["a", "b", "c"]}"#;
        let sidebars: Sidebars = serde_json::from_str(raw).unwrap();

        let ids: Vec<&str> = sidebars
            .get("docs")
            .unwrap()
            .iter()
            .map(|entry| match entry {
                SidebarEntry::Doc(id) => id.as_str(),
                _ => panic!("expected doc"),
            })
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_category_missing_items_is_a_parse_error() {
        let raw = r#"{"docs": [{"label": "Guides", "collapsed": true}]}"#;
        let err = serde_json::from_str::<Sidebars>(raw).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_collapsed_defaults_to_true_when_omitted() {
        let raw = r#"{"docs": [{"label": "Guides", "items": []}]}"#;
        let sidebars: Sidebars = serde_json::from_str(raw).unwrap();

        let SidebarEntry::Category(category) = &sidebars.get("docs").unwrap()[0] else {
            panic!("expected category");
        };
        assert!(category.collapsed);
        assert!(category.link.is_none());
    }

    #[test]
    fn test_link_and_collapsed_survive_load() {
        let raw = r#"{"docs": [{"label": "Optics", "collapsed": false, "link": "index", "items": ["a"]}]}"#;
        let sidebars: Sidebars = serde_json::from_str(raw).unwrap();

        let SidebarEntry::Category(category) = &sidebars.get("docs").unwrap()[0] else {
            panic!("expected category");
        };
        assert!(!category.collapsed);
        assert_eq!(category.link.as_ref().unwrap().as_str(), "index");
    }

    #[test]
    fn test_nested_categories_to_depth() {
        let mut inner = Category::new("Level 3").doc("leaf");
        for label in ["Level 2", "Level 1", "Level 0"] {
            inner = Category::new(label).category(inner);
        }

        let mut sidebars = Sidebars::new();
        sidebars.insert("docs", vec![inner.into()]).unwrap();

        let json = serde_json::to_string(&sidebars).unwrap();
        let back: Sidebars = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sidebars);

        let mut depth = 0;
        let mut current = &back.get("docs").unwrap()[0];
        while let SidebarEntry::Category(category) = current {
            depth += 1;
            match category.items.first() {
                Some(entry) => current = entry,
                None => break,
            }
        }
        assert_eq!(depth, 4);
    }

    #[test]
    fn test_roundtrip_identity() {
        let sidebars = Sidebars::starter();

        let json = serde_json::to_string_pretty(&sidebars).unwrap();
        let back: Sidebars = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sidebars);

        let yaml = serde_yaml::to_string(&sidebars).unwrap();
        let back: Sidebars = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, sidebars);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;

    fn entry_strategy() -> impl Strategy<Value = SidebarEntry> {
        let doc = "[a-z][a-z0-9-]{0,12}".prop_map(|id| SidebarEntry::Doc(DocId::new(id)));
        doc.prop_recursive(3, 24, 4, |inner| {
            (
                "[A-Za-z][A-Za-z0-9 ]{0,15}",
                any::<bool>(),
                option::of("[a-z][a-z0-9-]{0,8}".prop_map(|id| DocId::new(id))),
                vec(inner, 0..4),
            )
                .prop_map(|(label, collapsed, link, items)| {
                    SidebarEntry::Category(Category {
                        label,
                        collapsed,
                        link,
                        items,
                    })
                })
        })
    }

    proptest! {
        #[test]
        fn roundtrip_is_identity(entries in vec(entry_strategy(), 1..4)) {
            let mut sidebars = Sidebars::new();
            sidebars.insert("docs", entries).unwrap();

            let json = serde_json::to_string(&sidebars).unwrap();
            let back: Sidebars = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, sidebars);
        }
    }
}
