use thiserror::Error;

/// Rejected user input from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("quantity must be a whole number, got {0:?}")]
    NotANumber(String),
    #[error("quantity must be greater than zero, got {0}")]
    NotPositive(i64),
    #[error("unknown barrier material {0:?}")]
    UnknownMaterial(String),
    #[error("unknown cleaning frequency {0:?}")]
    UnknownFrequency(String),
}
