//! Show Command
//!
//! Prints a loaded sidebar collection, either as an indented tree for
//! humans or as JSON for tooling.

use std::path::PathBuf;

use console::style;

use crate::cli::util::resolve_sidebars_path;
use crate::sidebar::{SidebarEntry, SidebarLoader};
use crate::types::Result;

pub fn run(path: Option<PathBuf>, format: &str) -> Result<()> {
    let path = resolve_sidebars_path(path)?;

    let sidebars = SidebarLoader::load(&path)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&sidebars)?);
        return Ok(());
    }

    for (name, items) in sidebars.iter() {
        println!("{}", style(name).bold());
        print_entries(items, 1);
    }

    Ok(())
}

fn print_entries(items: &[SidebarEntry], depth: usize) {
    let indent = "  ".repeat(depth);
    for entry in items {
        match entry {
            SidebarEntry::Doc(id) => println!("{}- {}", indent, id),
            SidebarEntry::Category(category) => {
                let state = if category.collapsed { "+" } else { "-" };
                let mut line = format!(
                    "{}[{}] {}",
                    indent,
                    state,
                    style(&category.label).cyan()
                );
                if let Some(link) = &category.link {
                    line.push_str(&format!(" -> {}", link));
                }
                println!("{}", line);
                print_entries(&category.items, depth + 1);
            }
        }
    }
}
