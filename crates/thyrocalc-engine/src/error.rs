use thiserror::Error;

/// A profile rejected at the input boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid patient profile: {0}")]
    Intake(#[from] IntakeError),
}
