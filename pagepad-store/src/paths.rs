//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "pagepad";
const APPLICATION: &str = "pagepad";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the data directory for persistent application data.
///
/// - Linux: `$XDG_DATA_HOME/pagepad` or `~/.local/share/pagepad`
/// - macOS: `~/Library/Application Support/dev.pagepad.pagepad`
/// - Windows: `C:\Users\<User>\AppData\Roaming\pagepad\pagepad\data`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the path to the widget store database.
pub fn store_db() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("store.db"))
}
