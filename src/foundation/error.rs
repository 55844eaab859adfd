/// Convenience result type used across strokescene.
pub type StrokeResult<T> = Result<T, StrokeError>;

/// Top-level error taxonomy. Every variant is fatal for the conversion run.
#[derive(thiserror::Error, Debug)]
pub enum StrokeError {
    /// Source is missing, unparsable, or lacks the stroke collection.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A stroke record lacks a parameter field or has the wrong element count.
    #[error("missing field: {0}")]
    MissingField(String),

    /// Invalid conversion options or configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure while writing the scene document.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrokeError {
    /// Build a [`StrokeError::MalformedInput`] value.
    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Build a [`StrokeError::MissingField`] value.
    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingField(msg.into())
    }

    /// Build a [`StrokeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StrokeError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
