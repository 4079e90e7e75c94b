//! Utility functions shared across the codebase.

use std::path::Path;

/// Render a path with the home directory shortened to `~` for log output.
///
/// # Arguments
/// * `path` - Filesystem path to render
///
/// # Returns
/// The path as a string, with the user's home directory prefix replaced by `~`
pub fn path_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
