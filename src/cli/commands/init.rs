//! Init Command
//!
//! Initializes docnav in the current directory: project config under
//! .docnav/ plus a starter sidebars file at the project root.

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

pub fn run(force: bool) -> Result<()> {
    let out = Output::new();

    let root = std::env::current_dir()?;
    let site_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("site")
        .to_string();

    let dir = ConfigLoader::init_project(Some(&site_name), force)?;

    out.success("Initialized docnav project");
    println!("  Directory: {}", dir.display());
    println!(
        "  Config:    {}",
        ConfigLoader::project_config_path().display()
    );
    println!();
    println!("Next steps:");
    println!("  1. Edit sidebars.json to describe your navigation");
    println!("  2. Run 'docnav validate' to check the structure");

    Ok(())
}
