//! Error types for loading client resources.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for resource loading.
pub type GuiResult<T> = Result<T, GuiError>;

/// Errors raised while loading backgrounds or fonts.
///
/// None of these stop the game; callers log them and fall back.
#[derive(Debug, Error)]
pub enum GuiError {
    /// A file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// An image file could not be decoded.
    #[error("cannot decode {path}: {source}")]
    Decode {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: image::ImageError,
    },

    /// An image is larger than a texture allows.
    #[error("{path} is too large ({width}x{height})")]
    TooLarge {
        /// File that failed.
        path: PathBuf,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// A font file was rejected by the rasterizer.
    #[error("cannot load font {path}: {message}")]
    Font {
        /// File that failed.
        path: PathBuf,
        /// Rasterizer message.
        message: String,
    },

    /// No font file was found anywhere.
    #[error("no usable font found")]
    NoFont,
}
