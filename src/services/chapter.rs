use crate::error::{BookError, Result};
use crate::services::frontmatter::{FrontmatterStripper, StrippedLine};
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Strips the metadata header from one note and writes it into the output
/// tree, relocating any embedded attachments along the way.
pub struct ChapterCopier {
    embed_pattern: Regex,
}

impl ChapterCopier {
    pub fn new() -> Self {
        Self {
            embed_pattern: Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").unwrap(),
        }
    }

    /// Transform the note at `source_path` and write the result to
    /// `target_path`, creating the target's parent directory if missing.
    ///
    /// The frontmatter block is removed and its `title` key promoted to a
    /// level-1 heading. Every content line starting with `!` must carry an
    /// inline image link; the referenced file is copied from the source
    /// note's directory into the target's directory, keeping its relative
    /// path, while the line itself is emitted unchanged. Returns the copied
    /// attachment paths in document order.
    pub async fn transform_and_copy(
        &self,
        source_path: &Path,
        target_path: &Path,
    ) -> Result<Vec<PathBuf>> {
        if !source_path.exists() {
            return Err(BookError::FileNotFound {
                path: source_path.display().to_string(),
            });
        }

        let content = fs::read_to_string(source_path).await?;
        let (output, embeds) = self.transform_content(&content)?;

        let source_dir = source_path.parent().unwrap_or_else(|| Path::new(""));
        let output_dir = target_path.parent().unwrap_or_else(|| Path::new(""));

        if !output_dir.as_os_str().is_empty() {
            fs::create_dir_all(output_dir).await.map_err(|e| {
                BookError::OutputDirectory {
                    reason: format!("Failed to create {}: {}", output_dir.display(), e),
                }
            })?;
        }

        let mut copied = Vec::new();
        for embed in &embeds {
            let destination = self.copy_attachment(source_dir, output_dir, embed).await?;
            debug!("Copied attachment {} -> {}", embed, destination.display());
            copied.push(destination);
        }

        fs::write(target_path, output).await?;
        Ok(copied)
    }

    /// Run the line machine over `content`, returning the output buffer and
    /// the attachment links referenced by embed lines, in document order.
    ///
    /// Content lines keep their own line endings, including a missing final
    /// newline. Pure with respect to the filesystem; `transform_and_copy`
    /// does the surrounding I/O.
    pub fn transform_content(&self, content: &str) -> Result<(String, Vec<String>)> {
        let mut output = String::new();
        let mut embeds = Vec::new();
        let mut stripper = FrontmatterStripper::new();

        for line in content.split_inclusive('\n') {
            match stripper.feed(line) {
                Some(StrippedLine::Title(title)) => {
                    output.push_str("# ");
                    output.push_str(title);
                    output.push('\n');
                }
                Some(StrippedLine::Content(text)) => {
                    if text.starts_with('!') {
                        embeds.push(self.extract_embed(text)?);
                    }
                    output.push_str(text);
                }
                None => {}
            }
        }

        Ok((output, embeds))
    }

    fn extract_embed(&self, line: &str) -> Result<String> {
        let captures = self
            .embed_pattern
            .captures(line)
            .ok_or_else(|| BookError::MalformedEmbed {
                line: line.to_string(),
                reason: "no ![...](path) image link found".to_string(),
            })?;
        Ok(captures[1].to_string())
    }

    async fn copy_attachment(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        link: &str,
    ) -> Result<PathBuf> {
        let from = source_dir.join(link);
        if !from.exists() {
            return Err(BookError::FileNotFound {
                path: from.display().to_string(),
            });
        }

        let to = output_dir.join(link);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                BookError::OutputDirectory {
                    reason: format!("Failed to create {}: {}", parent.display(), e),
                }
            })?;
        }

        fs::copy(&from, &to).await?;
        Ok(to)
    }
}

impl Default for ChapterCopier {
    fn default() -> Self {
        Self::new()
    }
}
