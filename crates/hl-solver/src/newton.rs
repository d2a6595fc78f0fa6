//! Damped Newton solver for a single unknown with a lower-bound constraint.

use crate::error::{SolverError, SolverResult};
use hl_core::numeric::Real;
use tracing::{debug, trace};

/// Newton solver configuration.
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub abs_tol: Real,
    /// Smallest admissible root; iterates at or below this are rejected
    pub min_root: Real,
    /// Line search backtracking factor
    pub line_search_beta: Real,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-8,
            min_root: 1e-12,
            line_search_beta: 0.5,
            max_line_search_iters: 20,
        }
    }
}

/// Newton iteration result.
#[derive(Debug)]
pub struct NewtonResult {
    /// Converged root
    pub root: Real,
    /// Final residual
    pub residual: Real,
    /// Number of iterations
    pub iterations: usize,
}

/// Solve `residual_fn(x) = 0` for a root above `config.min_root`.
///
/// Each step is damped by backtracking until the iterate both stays above
/// the lower bound and reduces the residual magnitude. Returns an error if
/// the iteration budget runs out, the line search stagnates, or the
/// residual stops being finite; a root is never reported unconverged.
pub fn newton_solve<F, D>(
    x0: Real,
    residual_fn: F,
    derivative_fn: D,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(Real) -> Real,
    D: Fn(Real) -> Real,
{
    if !(x0 > config.min_root) {
        return Err(SolverError::NonPhysical {
            what: "initial guess at or below lower bound",
        });
    }

    let mut x = x0;
    let mut r = residual_fn(x);
    if !r.is_finite() {
        return Err(SolverError::NonFinite {
            what: "residual at initial guess",
            value: r,
        });
    }

    for iter in 0..config.max_iterations {
        if r.abs() < config.abs_tol {
            debug!(iterations = iter, root = x, residual = r, "newton converged");
            return Ok(NewtonResult {
                root: x,
                residual: r,
                iterations: iter,
            });
        }

        let dr = derivative_fn(x);
        if !dr.is_finite() {
            return Err(SolverError::NonFinite {
                what: "derivative",
                value: dr,
            });
        }
        if dr == 0.0 {
            return Err(SolverError::ConvergenceFailed {
                what: format!("zero derivative at iteration {iter}"),
            });
        }

        let dx = -r / dr;

        // Backtrack until the step is admissible and reduces the residual
        let mut alpha = 1.0;
        let mut x_new = x + dx;
        let mut r_new = residual_fn(x_new);
        for _ in 0..config.max_line_search_iters {
            let valid = x_new > config.min_root && r_new.is_finite();
            if valid && r_new.abs() < r.abs() {
                break;
            }
            alpha *= config.line_search_beta;
            x_new = x + alpha * dx;
            r_new = residual_fn(x_new);
        }

        if !(x_new > config.min_root) || !r_new.is_finite() {
            return Err(SolverError::ConvergenceFailed {
                what: format!("no admissible step found at iteration {iter}"),
            });
        }
        if alpha < 1e-10 {
            return Err(SolverError::ConvergenceFailed {
                what: format!("line search stagnated at iteration {iter}"),
            });
        }

        trace!(iteration = iter, x = x_new, residual = r_new, alpha, "newton step");
        x = x_new;
        r = r_new;
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {}",
            config.max_iterations, r
        ),
    })
}
