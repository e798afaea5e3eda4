//! Depth-bounded directory tree rendering

use std::path::Path;

/// Directories never shown in a rendered tree
const EXCLUDED_DIRS: &[&str] = &["vendor", "node_modules", ".git"];

/// Render the subdirectory tree of `root`, at most `max_depth` levels deep.
///
/// Lists directories only, sorted by name, one per line with a trailing
/// slash and two spaces of indent per nesting level. Dependency and VCS
/// directories are excluded at every level and never descended into. An
/// unreadable or missing root renders as empty.
pub fn render_tree(root: &Path, max_depth: usize) -> String {
    let mut out = String::new();
    render_level(root, "", 0, max_depth, &mut out);
    out
}

fn render_level(dir: &Path, prefix: &str, depth: usize, max_depth: usize, out: &mut String) {
    if depth >= max_depth {
        return;
    }

    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| !EXCLUDED_DIRS.contains(&name.as_str()))
        .collect();
    names.sort();

    for name in names {
        out.push_str(prefix);
        out.push_str(&name);
        out.push_str("/\n");
        render_level(
            &dir.join(&name),
            &format!("{prefix}  "),
            depth + 1,
            max_depth,
            out,
        );
    }
}
