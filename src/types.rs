use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One parsed chapter-list line from the index body.
///
/// Comes from a line of the shape `- <name>: [<text>](<target>)`, where
/// `target` is a path relative to the index file's directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterEntry {
    pub name: String,
    pub link_text: String,
    pub link_target: String,
    pub target_filename: String,
}

/// Summary of an index file, produced without writing any output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSummary {
    pub source: String,
    pub title: Option<String>,
    pub total_lines: usize,
    pub chapters: Vec<ChapterEntry>,
}

/// Everything one conversion run wrote into the output directory.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub index_file: PathBuf,
    pub chapter_files: Vec<PathBuf>,
    pub attachment_files: Vec<PathBuf>,
}
