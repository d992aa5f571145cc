use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("decode failed: {0}")]
    Decode(#[source] image::ImageError),

    #[error("encode failed: {0}")]
    Encode(#[source] image::ImageError),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to create output directory {path:?}: {source}")]
    Setup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to enumerate input directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid quality value: {0}. Must be between 0 and 100")]
    InvalidQuality(u8),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscodeError {
    /// True for errors scoped to one file; these are counted and reported,
    /// never fatal to the batch.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            TranscodeError::Read(_)
                | TranscodeError::Decode(_)
                | TranscodeError::Encode(_)
                | TranscodeError::Write(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TranscodeError>;
