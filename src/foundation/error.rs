/// Convenience result type used across swingcap.
pub type SwingcapResult<T> = Result<T, SwingcapError>;

/// Top-level error taxonomy used by converter APIs.
///
/// Recoverable conditions (a malformed row, a frame-count mismatch between
/// the two source streams) are not represented here: those are logged and
/// handled locally. Only failures that abort a requested conversion become
/// error values, and none of them terminate the host process.
#[derive(thiserror::Error, Debug)]
pub enum SwingcapError {
    /// A required source file is absent or unreadable.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Source content that cannot be decoded into any frames at all.
    #[error("parse error: {0}")]
    Parse(String),

    /// A frame index outside an already-loaded sequence.
    #[error("frame out of bounds: {0}")]
    Boundary(String),

    /// Errors when serializing assembled motion data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwingcapError {
    /// Build a [`SwingcapError::MissingInput`] value.
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Build a [`SwingcapError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SwingcapError::Boundary`] value.
    pub fn boundary(msg: impl Into<String>) -> Self {
        Self::Boundary(msg.into())
    }

    /// Build a [`SwingcapError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
