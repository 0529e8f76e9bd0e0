/// Convenience result type used across slidemotion.
pub type MotionResult<T> = Result<T, MotionError>;

/// Error taxonomy for the fallible edges of the crate.
///
/// The animation engine itself never fails: bad numeric input is normalized. These errors
/// come from opt-in validation, frame-rate construction, filmstrip options and JSON IO.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid user-provided slide or descriptor data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation plan failed strict validation.
    #[error("plan error: {0}")]
    Plan(String),

    /// Errors while sampling slide state over time.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Plan`] value.
    pub fn plan(msg: impl Into<String>) -> Self {
        Self::Plan(msg.into())
    }

    /// Build a [`MotionError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
