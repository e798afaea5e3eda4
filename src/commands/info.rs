//! Info command implementation

use std::path::PathBuf;

use crate::cli::InfoArgs;
use crate::docs::DocIndex;
use crate::error::Result;

/// Run info command
pub fn run(project: Option<PathBuf>, args: InfoArgs) -> Result<()> {
    let project_root = super::project_path(project)?;
    let doc = DocIndex::new(&project_root).module_info(&args.module)?;
    println!("{}", doc.trim_end());
    Ok(())
}
