//! Scalar root-finding for hydroloop.
//!
//! This crate provides a damped Newton solver for single-variable implicit
//! equations with a positivity constraint on the root. Convergence failure
//! is always reported explicitly; the solver never returns an unconverged
//! or non-physical root as if it were a solution.

pub mod error;
pub mod newton;

pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
