use crate::error::{BookError, Result};
use crate::services::chapter::ChapterCopier;
use crate::services::frontmatter::{FrontmatterStripper, StrippedLine};
use crate::types::{ChapterEntry, ConvertReport, IndexSummary};
use regex::Regex;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Turns the index note into `README.md`, converting every chapter it
/// references along the way.
pub struct IndexTransformer {
    link_pattern: Regex,
    copier: ChapterCopier,
}

impl IndexTransformer {
    pub fn new() -> Self {
        Self {
            link_pattern: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
            copier: ChapterCopier::new(),
        }
    }

    /// Convert the index at `index_path` and all of its chapters into
    /// `output_dir`, writing the rewritten index as `README.md`.
    ///
    /// Chapter source paths are resolved relative to the index file's own
    /// directory; chapter output files land directly in `output_dir`. The
    /// caller is expected to have cleared stale `.md` files beforehand
    /// (see `OutputCleaner`).
    pub async fn transform_index(
        &self,
        index_path: &Path,
        output_dir: &Path,
    ) -> Result<ConvertReport> {
        let content = self.read_index(index_path).await?;
        let index_dir = index_path.parent().unwrap_or_else(|| Path::new(""));

        let mut output = String::new();
        let mut stripper = FrontmatterStripper::new();
        let mut chapter_files = Vec::new();
        let mut attachment_files = Vec::new();

        for line in content.split_inclusive('\n') {
            match stripper.feed(line) {
                Some(StrippedLine::Title(title)) => {
                    output.push_str("# ");
                    output.push_str(title);
                    output.push('\n');
                }
                Some(StrippedLine::Content(text)) => {
                    if text.starts_with("- ") {
                        let entry = self.parse_entry(text)?;
                        let source_path = index_dir.join(&entry.link_target);
                        let target_path = output_dir.join(&entry.target_filename);

                        info!(
                            "Converting chapter '{}' from {}",
                            entry.name,
                            source_path.display()
                        );

                        let copied = self
                            .copier
                            .transform_and_copy(&source_path, &target_path)
                            .await?;
                        attachment_files.extend(copied);

                        // Link target is the chapter file's path relative to
                        // the output directory, which today reduces to the
                        // bare filename.
                        let rewritten = target_path
                            .strip_prefix(output_dir)
                            .unwrap_or(target_path.as_path());
                        output.push_str(&format!(
                            "- [{}]({})\n",
                            entry.link_text,
                            rewritten.display()
                        ));
                        chapter_files.push(target_path.clone());
                    } else {
                        // Passthrough keeps the line's own ending, so a
                        // missing final newline survives the rewrite.
                        output.push_str(text);
                    }
                }
                None => {}
            }
        }

        fs::create_dir_all(output_dir).await.map_err(|e| {
            BookError::OutputDirectory {
                reason: format!("Failed to create {}: {}", output_dir.display(), e),
            }
        })?;

        let index_file = output_dir.join("README.md");
        fs::write(&index_file, output).await?;
        debug!("Wrote index file {}", index_file.display());

        Ok(ConvertReport {
            index_file,
            chapter_files,
            attachment_files,
        })
    }

    /// Parse the index without converting anything, for reporting.
    pub async fn summarize_index(&self, index_path: &Path) -> Result<IndexSummary> {
        let content = self.read_index(index_path).await?;
        let source = index_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        self.summarize(&content, source)
    }

    /// Collect the index's title and chapter entries from `content`.
    pub fn summarize(&self, content: &str, source: String) -> Result<IndexSummary> {
        let mut stripper = FrontmatterStripper::new();
        let mut title = None;
        let mut chapters = Vec::new();

        for line in content.lines() {
            match stripper.feed(line) {
                Some(StrippedLine::Title(text)) => title = Some(text.to_string()),
                Some(StrippedLine::Content(text)) if text.starts_with("- ") => {
                    chapters.push(self.parse_entry(text)?);
                }
                _ => {}
            }
        }

        Ok(IndexSummary {
            source,
            title,
            total_lines: content.lines().count(),
            chapters,
        })
    }

    /// Parse one chapter-list line of the shape
    /// `- <name>: [<text>](<target>)`.
    ///
    /// The first colon separates the chapter name from the markdown link;
    /// both halves are trimmed. The derived output filename is
    /// `<name>.md`.
    pub fn parse_entry(&self, line: &str) -> Result<ChapterEntry> {
        let body = line.strip_prefix("- ").ok_or_else(|| {
            BookError::MalformedEntry {
                line: line.trim_end().to_string(),
                reason: "missing '- ' list marker".to_string(),
            }
        })?;

        let (name, link_spec) = body.split_once(':').ok_or_else(|| {
            BookError::MalformedEntry {
                line: line.trim_end().to_string(),
                reason: "no ':' separating the chapter name from its link".to_string(),
            }
        })?;
        let name = name.trim();
        let link_spec = link_spec.trim();

        let captures = self.link_pattern.captures(link_spec).ok_or_else(|| {
            BookError::MalformedEntry {
                line: line.trim_end().to_string(),
                reason: "no [text](target) markdown link after the ':'".to_string(),
            }
        })?;

        Ok(ChapterEntry {
            name: name.to_string(),
            link_text: captures[1].to_string(),
            link_target: captures[2].to_string(),
            target_filename: format!("{}.md", name),
        })
    }

    async fn read_index(&self, index_path: &Path) -> Result<String> {
        if !index_path.exists() {
            return Err(BookError::FileNotFound {
                path: index_path.display().to_string(),
            });
        }
        Ok(fs::read_to_string(index_path).await?)
    }
}

impl Default for IndexTransformer {
    fn default() -> Self {
        Self::new()
    }
}
