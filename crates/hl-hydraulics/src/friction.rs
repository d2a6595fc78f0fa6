//! Darcy friction factor from the implicit Colebrook-White relation.

use hl_core::units::Length;
use hl_solver::{NewtonConfig, newton_solve};
use tracing::debug;

use crate::error::{HydraulicError, HydraulicResult};
use crate::regime::LAMINAR_REYNOLDS_MAX;

/// A priori estimate for turbulent flow in the supported bore/roughness
/// range; seeds the Newton iteration.
pub const INITIAL_GUESS: f64 = 0.02;

/// Residual magnitude below which the solve is accepted.
pub const RESIDUAL_TOLERANCE: f64 = 1e-8;

/// Iterates at or below this friction factor are rejected as non-physical.
const MIN_FRICTION_FACTOR: f64 = 1e-6;

/// Colebrook-White residual
/// `1/√f + 2·log10(ε/(3.7·D) + 2.51/(Re·√f))`; zero at the friction factor.
pub fn colebrook_residual(
    friction_factor: f64,
    roughness_m: f64,
    bore_m: f64,
    reynolds: f64,
) -> f64 {
    let inv_sqrt = 1.0 / friction_factor.sqrt();
    let arg = roughness_m / (3.7 * bore_m) + 2.51 * inv_sqrt / reynolds;
    inv_sqrt + 2.0 * arg.log10()
}

/// Analytic derivative of [`colebrook_residual`] with respect to the
/// friction factor.
pub fn colebrook_derivative(
    friction_factor: f64,
    roughness_m: f64,
    bore_m: f64,
    reynolds: f64,
) -> f64 {
    let inv_sqrt = 1.0 / friction_factor.sqrt();
    let d_inv_sqrt = -0.5 * inv_sqrt / friction_factor;
    let b = 2.51 / reynolds;
    let arg = roughness_m / (3.7 * bore_m) + b * inv_sqrt;
    d_inv_sqrt * (1.0 + 2.0 * b / (arg * std::f64::consts::LN_10))
}

/// Solve Colebrook-White for the Darcy friction factor.
///
/// Requires a turbulent Reynolds number; the regime gate upstream
/// guarantees this for pipeline callers, and direct callers get an
/// `InvalidConfig` rather than a meaningless root.
pub fn solve_friction_factor(
    roughness: Length,
    bore: Length,
    reynolds: f64,
) -> HydraulicResult<f64> {
    if reynolds <= LAMINAR_REYNOLDS_MAX {
        return Err(HydraulicError::InvalidConfig {
            what: "Colebrook-White requires turbulent flow",
        });
    }

    let roughness_m = roughness.value;
    let bore_m = bore.value;
    let config = NewtonConfig {
        abs_tol: RESIDUAL_TOLERANCE,
        min_root: MIN_FRICTION_FACTOR,
        ..NewtonConfig::default()
    };

    let solve = newton_solve(
        INITIAL_GUESS,
        |f| colebrook_residual(f, roughness_m, bore_m, reynolds),
        |f| colebrook_derivative(f, roughness_m, bore_m, reynolds),
        &config,
    )?;

    debug!(
        friction_factor = solve.root,
        iterations = solve.iterations,
        reynolds,
        "colebrook solve"
    );
    Ok(solve.root)
}
