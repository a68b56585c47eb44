//! Shape Validation
//!
//! Walks a sidebar collection and fails fast on the first structural
//! violation, reporting the sidebar name and category breadcrumb. Document
//! references are only shape-checked; whether they resolve to real pages is
//! the site generator's concern.

use super::model::{Sidebars, SidebarEntry};
use crate::types::{ShapeError, ShapeIssue};

/// Validate the whole collection.
///
/// Checks: at least one sidebar, non-empty category labels, non-empty
/// document references and links. Name uniqueness is enforced at
/// construction time by [`Sidebars::insert`].
pub fn validate(sidebars: &Sidebars) -> Result<(), ShapeError> {
    if sidebars.is_empty() {
        return Err(ShapeError::no_sidebars());
    }

    for (name, items) in sidebars.iter() {
        let mut path = Vec::new();
        walk(name, &mut path, items)?;
    }

    Ok(())
}

fn walk(
    sidebar: &str,
    path: &mut Vec<String>,
    items: &[SidebarEntry],
) -> Result<(), ShapeError> {
    for entry in items {
        match entry {
            SidebarEntry::Doc(id) => {
                if id.as_str().trim().is_empty() {
                    return Err(ShapeError::at(ShapeIssue::EmptyDocId, sidebar, path));
                }
            }
            SidebarEntry::Category(category) => {
                if category.label.trim().is_empty() {
                    return Err(ShapeError::at(ShapeIssue::EmptyLabel, sidebar, path));
                }
                if let Some(link) = &category.link
                    && link.as_str().trim().is_empty()
                {
                    path.push(category.label.clone());
                    return Err(ShapeError::at(ShapeIssue::EmptyLink, sidebar, path));
                }

                path.push(category.label.clone());
                walk(sidebar, path, &category.items)?;
                path.pop();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::model::Category;

    #[test]
    fn test_empty_collection_rejected() {
        let err = Sidebars::new().validate().unwrap_err();
        assert_eq!(err.issue, ShapeIssue::NoSidebars);
    }

    #[test]
    fn test_starter_is_valid() {
        Sidebars::starter().validate().unwrap();
    }

    #[test]
    fn test_empty_label_reports_breadcrumb() {
        let tree = Category::new("Guides").category(Category::new("  ").doc("a"));
        let mut sidebars = Sidebars::new();
        sidebars.insert("docs", vec![tree.into()]).unwrap();

        let err = sidebars.validate().unwrap_err();
        assert_eq!(err.issue, ShapeIssue::EmptyLabel);
        assert_eq!(err.sidebar.as_deref(), Some("docs"));
        assert_eq!(err.path, vec!["Guides".to_string()]);
    }

    #[test]
    fn test_empty_doc_id_rejected() {
        let tree = Category::new("Guides").doc("");
        let mut sidebars = Sidebars::new();
        sidebars.insert("docs", vec![tree.into()]).unwrap();

        let err = sidebars.validate().unwrap_err();
        assert_eq!(err.issue, ShapeIssue::EmptyDocId);
        assert_eq!(err.path, vec!["Guides".to_string()]);
    }

    #[test]
    fn test_empty_link_rejected() {
        let tree = Category::new("Guides").link("").doc("a");
        let mut sidebars = Sidebars::new();
        sidebars.insert("docs", vec![tree.into()]).unwrap();

        let err = sidebars.validate().unwrap_err();
        assert_eq!(err.issue, ShapeIssue::EmptyLink);
        assert_eq!(err.path, vec!["Guides".to_string()]);
    }

    #[test]
    fn test_unknown_doc_ids_pass_shape_check() {
        // existence is the generator's concern, only shape is checked here
        let tree = Category::new("Guides").doc("does-not-exist-anywhere");
        let mut sidebars = Sidebars::new();
        sidebars.insert("docs", vec![tree.into()]).unwrap();

        sidebars.validate().unwrap();
    }
}
