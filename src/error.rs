use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Malformed chapter entry '{line}': {reason}")]
    MalformedEntry { line: String, reason: String },

    #[error("Malformed attachment embed '{line}': {reason}")]
    MalformedEmbed { line: String, reason: String },

    #[error("Output directory error: {reason}")]
    OutputDirectory { reason: String },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BookError>;
