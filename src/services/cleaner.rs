use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Deletes the markdown files left in an output directory by a previous
/// run. Attachments and every other non-markdown file stay in place.
pub struct OutputCleaner;

impl OutputCleaner {
    /// Recursively remove every file under `output_dir` whose name ends in
    /// `.md`. A missing directory counts as already clean. Returns the
    /// removed paths.
    pub fn remove_markdown_files(output_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();

        if !output_dir.exists() {
            return Ok(removed);
        }

        for entry in WalkDir::new(output_dir) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().ends_with(".md") {
                std::fs::remove_file(entry.path())?;
                debug!("Removed stale file {}", entry.path().display());
                removed.push(entry.path().to_path_buf());
            }
        }

        Ok(removed)
    }
}
