//! Error types for the sizing core.

use hl_solver::SolverError;
use thiserror::Error;

/// Errors that can end a sizing request.
///
/// A laminar regime is not an error (see `SizingOutcome::Laminar`), and an
/// infeasible configuration is reported as a negative length with its
/// feasibility flag cleared, never as an `Err`.
#[derive(Error, Debug, Clone)]
pub enum HydraulicError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Friction factor solve failed: {0}")]
    Convergence(#[from] SolverError),
}

pub type HydraulicResult<T> = Result<T, HydraulicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HydraulicError::InvalidConfig {
            what: "elbow count out of range",
        };
        assert!(err.to_string().contains("elbow count"));
    }

    #[test]
    fn solver_error_wraps() {
        let solver_err = SolverError::NonPhysical {
            what: "negative root",
        };
        let err: HydraulicError = solver_err.into();
        assert!(matches!(err, HydraulicError::Convergence(_)));
    }
}
