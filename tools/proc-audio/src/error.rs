//! Error types for audio synthesis and encoding

use std::path::PathBuf;

/// Errors produced while synthesizing or encoding audio
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// A generator was asked for a zero, negative or non-finite duration
    #[error("invalid {what} duration {duration}s (must be > 0)")]
    InvalidDuration { what: &'static str, duration: f64 },

    /// Loot rarity outside the 0-4 range
    #[error("invalid loot rarity {0} (must be 0-4)")]
    InvalidRarity(u8),

    /// Looping requires at least one source sample
    #[error("cannot loop an empty buffer")]
    EmptySource,

    /// Note name not present in the frequency table
    #[error("unknown note name {0:?}")]
    UnknownNote(String),

    /// WAV data that this pipeline does not produce
    #[error("unsupported WAV format: {0}")]
    UnsupportedFormat(String),

    /// Container encode/decode failure
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),

    /// Filesystem failure with the offending path
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for audio operations
pub type Result<T> = std::result::Result<T, AudioError>;
