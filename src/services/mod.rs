pub mod chapter;
pub mod cleaner;
pub mod frontmatter;
pub mod index;

pub use chapter::ChapterCopier;
pub use cleaner::OutputCleaner;
pub use index::IndexTransformer;
