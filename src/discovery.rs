//! Input discovery: single files and recursive directory walks

use glob::{glob, Pattern};
use std::path::{Component, Path, PathBuf};

/// Error during input discovery.
#[derive(Debug)]
pub enum DiscoveryError {
    /// Invalid glob pattern
    InvalidPattern(String, glob::PatternError),
    /// IO error during file enumeration
    Io(std::io::Error),
}

impl std::fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryError::InvalidPattern(pattern, err) => {
                write!(f, "Invalid glob pattern '{}': {}", pattern, err)
            }
            DiscoveryError::Io(err) => write!(f, "IO error during discovery: {}", err),
        }
    }
}

impl std::error::Error for DiscoveryError {}

impl From<std::io::Error> for DiscoveryError {
    fn from(err: std::io::Error) -> Self {
        DiscoveryError::Io(err)
    }
}

/// Check if a path has a `.png` extension (case-sensitive).
pub fn is_png_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("png")
}

/// Whether `path` sits inside a directory named `skip_dir` below `root`.
fn is_in_skipped_dir(root: &Path, path: &Path, skip_dir: &str) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut components: Vec<Component<'_>> = relative.components().collect();
    // The last component is the file itself.
    components.pop();
    components.iter().any(|c| c.as_os_str() == skip_dir)
}

/// Find all `.png` files under `root`, recursively.
///
/// Any directory named `skip_dir` (the tool's own output folder) is skipped
/// at every depth. Results are sorted.
pub fn find_png_files(root: &Path, skip_dir: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = format!("{}/**/*.png", Pattern::escape(&root.to_string_lossy()));
    let paths = glob(&pattern).map_err(|e| DiscoveryError::InvalidPattern(pattern.clone(), e))?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() && is_png_file(&path) && !is_in_skipped_dir(root, &path, skip_dir) {
                    files.push(path);
                }
            }
            Err(e) => {
                // Unreadable entries are reported and skipped, not fatal
                log::warn!("Skipping unreadable path {}: {}", e.path().display(), e.error());
            }
        }
    }

    files.sort();
    Ok(files)
}
