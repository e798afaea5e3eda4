//! Modules command implementation
//!
//! Lists the viltkit modules installed under the project's packages
//! directory with their manifest metadata.

use std::path::PathBuf;

use console::Style;

use crate::docs::DocIndex;
use crate::error::Result;

/// Run modules command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let project_root = super::project_path(project)?;
    let index = DocIndex::new(&project_root);

    if !index.modules_root().is_dir() {
        println!("No viltkit modules directory found.");
        return Ok(());
    }

    let modules = index.list_modules()?;
    if modules.is_empty() {
        println!("No viltkit modules found.");
        return Ok(());
    }

    println!("Installed modules ({}):", modules.len());
    println!();

    for module in &modules {
        println!("  {}", Style::new().bold().yellow().apply_to(&module.name));
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Package:"),
            module.manifest.package_name()
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Version:"),
            module.manifest.package_version()
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            module.manifest.package_description()
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Path:"),
            module.path.display()
        );
        println!();
    }

    Ok(())
}
