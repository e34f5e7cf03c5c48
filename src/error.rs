use thiserror::Error;

/// Errors the caller is expected to match on. Everything else travels as a
/// plain `anyhow::Error`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TrackError {
    pub fn invalid_input(reason: impl Into<String>) -> anyhow::Error {
        TrackError::InvalidInput(reason.into()).into()
    }
}

/// Returns true if `error` (or anything in its chain) is an `InvalidInput`.
pub fn is_invalid_input(error: &anyhow::Error) -> bool {
    error
        .chain()
        .any(|e| matches!(e.downcast_ref::<TrackError>(), Some(TrackError::InvalidInput(_))))
}
