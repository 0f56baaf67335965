use thiserror::Error;

/// Canonical error type for segment metadata contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A constructor argument failed validation.
    #[error("invalid argument `{argument}`: {message}")]
    InvalidArgument {
        /// Name of the offending argument (e.g. `"name"`).
        argument: &'static str,
        /// Human-readable explanation of the violation.
        message: String,
    },
}

impl CoreError {
    /// Creates an `InvalidArgument` variant.
    #[must_use]
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Returns the argument name for `InvalidArgument` errors.
    #[must_use]
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// Convenient result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
