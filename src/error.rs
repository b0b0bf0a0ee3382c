//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort icon generation.
///
/// Font loading problems never show up here: they are absorbed by the
/// built-in fallback font (see [`crate::fonts::resolve_font`]).
#[derive(Error, Debug)]
pub enum Error {
    /// Icon size must be a positive number of pixels
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    /// The canvas for this size cannot be represented in memory
    #[error("Cannot allocate a {0}x{0} canvas")]
    CanvasAllocation(u32),

    /// Failed to create the output directory
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the canvas as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Failed to write an icon file
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
