//! Error types for emojicon
//!
//! Uses `thiserror` for library errors. Every pipeline stage fails
//! terminally; nothing here is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for emojicon operations
pub type EmojiconResult<T> = Result<T, EmojiconError>;

/// Main error type for emojicon operations
#[derive(Error, Debug)]
pub enum EmojiconError {
    /// No emoji input supplied
    #[error("emoji must not be empty")]
    EmptyEmoji,

    /// Raster output requested without a positive size
    #[error("size must be greater than 0, got {size}")]
    InvalidSize { size: u32 },

    /// Output extension is neither .svg nor .png
    #[error("unsupported output format: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// Code-point key failed lexical validation after normalization
    #[error("invalid unicode code points {key:?} for emoji {glyph:?}")]
    InvalidCodePoints { key: String, glyph: String },

    /// Transport-level failure before a response was received
    #[error("couldn't download SVG from {url:?}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Remote returned 404 for the constructed asset URL
    #[error("no emoji asset at {url:?}: {status}")]
    RemoteNotFound { url: String, status: String },

    /// Remote returned a non-success status other than 404
    #[error("couldn't download SVG from {url:?}: {status}")]
    RemoteError { url: String, status: String },

    /// Response body could not be fully drained
    #[error("couldn't read SVG content from {url:?}: {source}")]
    ReadFailed {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// Vector source is malformed or uses unsupported constructs
    #[error("couldn't parse SVG: {source}")]
    VectorParseFailed {
        #[source]
        source: resvg::usvg::Error,
    },

    /// Raster encoder failure
    #[error("couldn't encode PNG: {source}")]
    EncodeFailed {
        #[source]
        source: image::ImageError,
    },

    /// Destination file could not be written
    #[error("couldn't write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid TOML for the expected schema
    #[error("invalid config file {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
