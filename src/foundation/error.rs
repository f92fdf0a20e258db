/// Convenience result type used across spinloop.
pub type SpinResult<T> = Result<T, SpinError>;

/// Error taxonomy for a single conversion run.
///
/// Every variant carries the underlying cause's message verbatim. Nothing is
/// retried; the first failure aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum SpinError {
    /// Invalid frame count, duration or other option.
    #[error("configuration error: {0}")]
    Config(String),

    /// Source image missing, unreadable or not decodable.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failure while producing one of the rotated frames.
    #[error("render error: {0}")]
    Render(String),

    /// Failure while encoding the animation or writing it to disk.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpinError {
    /// Build a [`SpinError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SpinError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SpinError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpinError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
