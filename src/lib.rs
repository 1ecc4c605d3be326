//! # Markdown Book Library
//!
//! A library for flattening a directory of linked notes (as produced by a
//! personal note-taking tool such as Obsidian) into a standalone markdown
//! book: one `README.md` index plus one file per chapter, with embedded
//! attachments relocated into the output tree.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use markdown_book::{IndexTransformer, OutputCleaner};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let output_dir = Path::new("./book");
//!
//!     // Clear markdown files left over from a previous run
//!     OutputCleaner::remove_markdown_files(output_dir)?;
//!
//!     // Convert the index and every chapter it references
//!     let transformer = IndexTransformer::new();
//!     let report = transformer
//!         .transform_index(Path::new("notes/index.md"), output_dir)
//!         .await?;
//!
//!     println!("Created {} chapter files", report.chapter_files.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod services;
pub mod types;

// Re-export main types and services for easier usage
pub use error::{BookError, Result};
pub use services::{ChapterCopier, IndexTransformer, OutputCleaner};
pub use types::{ChapterEntry, ConvertReport, IndexSummary};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_full_conversion_workflow() {
        let dir = TempDir::new().unwrap();
        let notes = dir.path().join("notes");
        let book = dir.path().join("book");

        write(
            &notes.join("index.md"),
            "---\ntitle: My Notes\ndate: 2024-10-14\n---\n\n- Intro: [Intro](intro.md)\n- Setup: [Setup](guides/setup.md)\n",
        );
        write(
            &notes.join("intro.md"),
            "---\ntitle: Introduction\n---\nWelcome.\n![diagram](images/arch.png)\n",
        );
        write(&notes.join("guides/setup.md"), "No frontmatter here.\n");
        std::fs::create_dir_all(notes.join("images")).unwrap();
        std::fs::write(notes.join("images/arch.png"), b"fake png").unwrap();

        // Simulate a stale file from an earlier run
        write(&book.join("Old.md"), "stale");

        let removed = OutputCleaner::remove_markdown_files(&book).unwrap();
        assert_eq!(removed.len(), 1);

        let transformer = IndexTransformer::new();
        let report = transformer
            .transform_index(&notes.join("index.md"), &book)
            .await
            .unwrap();

        let readme = std::fs::read_to_string(&report.index_file).unwrap();
        assert_eq!(
            readme,
            "# My Notes\n\n- [Intro](Intro.md)\n- [Setup](Setup.md)\n"
        );

        let intro = std::fs::read_to_string(book.join("Intro.md")).unwrap();
        assert_eq!(intro, "# Introduction\nWelcome.\n![diagram](images/arch.png)\n");

        let setup = std::fs::read_to_string(book.join("Setup.md")).unwrap();
        assert_eq!(setup, "No frontmatter here.\n");

        assert_eq!(
            std::fs::read(book.join("images/arch.png")).unwrap(),
            b"fake png"
        );
        assert!(!book.join("Old.md").exists());

        // The report serializes for the convert --json-output path
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("Intro.md"));
        assert!(json.contains("attachment_files"));
    }

    #[tokio::test]
    async fn test_rerun_overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        let notes = dir.path().join("notes");
        let book = dir.path().join("book");

        write(&notes.join("index.md"), "- A: [A](a.md)\n");
        write(&notes.join("a.md"), "first version\n");

        let transformer = IndexTransformer::new();

        OutputCleaner::remove_markdown_files(&book).unwrap();
        transformer
            .transform_index(&notes.join("index.md"), &book)
            .await
            .unwrap();

        write(&notes.join("a.md"), "second version\n");

        OutputCleaner::remove_markdown_files(&book).unwrap();
        transformer
            .transform_index(&notes.join("index.md"), &book)
            .await
            .unwrap();

        let chapter = std::fs::read_to_string(book.join("A.md")).unwrap();
        assert_eq!(chapter, "second version\n");
    }

    #[test]
    fn test_transformer_creation() {
        let _ = IndexTransformer::new();
        let _ = ChapterCopier::new();
        assert!(!VERSION.is_empty());
    }
}
