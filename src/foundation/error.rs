use std::path::PathBuf;

/// Convenience result type used across snakegif.
pub type SnakeGifResult<T> = Result<T, SnakeGifError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum SnakeGifError {
    /// Invalid user-provided arguments or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// An input file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No frame of the sequence intersects the requested time window.
    #[error("no frames in time range [{start}, {end})s")]
    EmptyWindow {
        /// Window start in seconds.
        start: f64,
        /// Window end in seconds (exclusive).
        end: f64,
    },

    /// Malformed or unsupported GIF data.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failure while producing an output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// An external program failed or could not be started.
    #[error("external tool error: {0}")]
    External(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnakeGifError {
    /// Build a [`SnakeGifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SnakeGifError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SnakeGifError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SnakeGifError::External`] value.
    pub fn external(msg: impl Into<String>) -> Self {
        Self::External(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
