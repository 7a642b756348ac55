use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Which files a directory walk collects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFilter {
    /// File extensions to convert, without the dot
    pub extensions: Vec<String>,
    /// Directory names never descended into
    pub skip_dirs: Vec<String>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            extensions: ["h", "c", "cc", "cpp"].map(String::from).to_vec(),
            skip_dirs: ["test-inputs", "third-party", "linters"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl SourceFilter {
    pub fn is_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }
}

/// Collect the source files under `root`, following symlinks, in path order.
/// Entries that cannot be read are logged and skipped.
pub fn collect_sources(root: &Path, filter: &SourceFilter) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let skip = entry.depth() > 0
                && entry.file_type().is_dir()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| filter.is_skipped_dir(name));
            if skip {
                tracing::debug!("Skipping directory: {}", entry.path().display());
            }
            !skip
        });

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() && filter.is_source(entry.path()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Skipping unreadable entry: {e}"),
        }
    }
    files
}
