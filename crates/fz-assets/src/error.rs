//! Error types for background generation.

use std::path::PathBuf;

/// Errors produced while generating the asset directory.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The requested image size is unusable.
    #[error("invalid size {width}x{height}: both sides must be between 1 and {max}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Largest accepted side.
        max: u32,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The image encoder rejected a background.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        /// Output file.
        path: PathBuf,
        /// Underlying error.
        source: image::ImageError,
    },

    /// The manifest could not be serialized.
    #[error("manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Convenience alias for generator results.
pub type AssetResult<T> = Result<T, AssetError>;
