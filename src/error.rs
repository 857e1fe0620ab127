//! Error types
//!
//! Every failure in the core is a rejection: the match state is left exactly
//! as it was.

use crate::sim::GamePhase;

/// Reasons a throw's numbers are unacceptable
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{0} is not a number: {1:?}")]
    NotANumber(&'static str, String),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("angle {0} is outside 0-90 degrees")]
    AngleOutOfRange(f64),

    #[error("velocity {0} is outside 0-100")]
    VelocityOutOfRange(f64),
}

/// Rejected match operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThrowError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("cannot {operation} while the match is {phase:?}")]
    InvalidPhaseOperation {
        operation: &'static str,
        phase: GamePhase,
    },
}

/// Settings loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}
