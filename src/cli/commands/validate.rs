//! Validate Command
//!
//! Loads a sidebars file and shape-checks it, reporting what was found or
//! failing with the exact sidebar/category that is malformed.

use std::path::PathBuf;

use crate::cli::ui::Output;
use crate::cli::util::resolve_sidebars_path;
use crate::sidebar::{SidebarEntry, SidebarLoader, Sidebars};
use crate::types::Result;

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let out = Output::new();
    let path = resolve_sidebars_path(path)?;

    println!("Validating sidebars...");
    println!("  File: {}", path.display());
    println!();

    let sidebars = SidebarLoader::load(&path)?;
    let stats = Stats::collect(&sidebars);

    out.success("Sidebar structure is well-formed");
    println!("  Sidebars:   {}", sidebars.len());
    println!("  Categories: {}", stats.categories);
    println!("  Documents:  {}", stats.docs);
    println!("  Max depth:  {}", stats.max_depth);

    Ok(())
}

#[derive(Default)]
struct Stats {
    categories: usize,
    docs: usize,
    max_depth: usize,
}

impl Stats {
    fn collect(sidebars: &Sidebars) -> Self {
        let mut stats = Self::default();
        for (_, items) in sidebars.iter() {
            stats.walk(items, 1);
        }
        stats
    }

    fn walk(&mut self, items: &[SidebarEntry], depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        for entry in items {
            match entry {
                SidebarEntry::Doc(_) => self.docs += 1,
                SidebarEntry::Category(category) => {
                    self.categories += 1;
                    if category.link.is_some() {
                        self.docs += 1;
                    }
                    self.walk(&category.items, depth + 1);
                }
            }
        }
    }
}
