//! Search command implementation
//!
//! Case-insensitive substring search across the documentation of installed
//! viltkit modules, printed with a context snippet per matching file.

use std::path::PathBuf;

use console::Style;

use crate::cli::SearchArgs;
use crate::docs::DocIndex;
use crate::error::Result;

/// Run search command
pub fn run(project: Option<PathBuf>, args: SearchArgs) -> Result<()> {
    let project_root = super::project_path(project)?;
    let index = DocIndex::new(&project_root);

    let module = (args.module != "all").then_some(args.module.as_str());
    let query = args.query.to_ascii_lowercase();
    let matches = index.search(&query, module)?;

    if matches.is_empty() {
        println!("No documentation found matching '{}'.", query);
        return Ok(());
    }

    println!("Found {} match(es) for '{}':", matches.len(), query);
    println!();

    for entry in &matches {
        println!(
            "  {}",
            Style::new()
                .bold()
                .yellow()
                .apply_to(format!("{}/{}", entry.module, entry.file))
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Path:"),
            entry.path.display()
        );
        println!("    {}", entry.context);
        println!();
    }

    Ok(())
}
