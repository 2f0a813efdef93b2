//! Error types for Giftbox

use thiserror::Error;

/// Main error type for Giftbox operations
#[derive(Error, Debug)]
pub enum GiftError {
    /// No catalog record exists for the content key
    #[error("Content not found: {0}")]
    ContentNotFound(String),

    /// Gallery item has no image or video attached
    #[error("Gallery item has no media: {0}")]
    MediaMissing(String),

    /// Gallery item key does not exist in the gallery
    #[error("Gallery item not found: {0}")]
    ItemNotFound(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The director's action channel is gone
    #[error("Director stopped")]
    DirectorStopped,
}

/// Result type alias using GiftError
pub type GiftResult<T> = Result<T, GiftError>;
