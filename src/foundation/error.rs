/// Convenience result type used across pathmorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Error taxonomy for parsing and interpolation setup.
///
/// Every variant is raised while building an interpolation. Once a blend function exists,
/// sampling it cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Unsupported or malformed path command.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Bad call arguments, such as fewer than two keyframes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A request the given input cannot satisfy, such as alt rendering of plain path data.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// A path source could not be resolved to path data.
    #[error("path source error: {0}")]
    Source(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Syntax`] value.
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    /// Build a [`MorphError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`MorphError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Build a [`MorphError::Source`] value.
    pub fn path_source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
