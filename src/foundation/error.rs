/// Convenience result type used across blockicon.
pub type BlockiconResult<T> = Result<T, BlockiconError>;

/// Top-level error taxonomy used by the generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlockiconError {
    /// Invalid caller-provided options (degenerate size or scale).
    #[error("validation error: {0}")]
    Validation(String),

    /// The PNG encoder rejected the sample buffer.
    #[error("encoding error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlockiconError {
    /// Build a [`BlockiconError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlockiconError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
