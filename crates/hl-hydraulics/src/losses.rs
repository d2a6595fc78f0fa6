//! Linear and singular head losses, and the length the remaining head buys.

use hl_core::units::constants::G_MPS2;
use serde::Serialize;

/// Loss coefficient of one wide-angle 90° elbow.
pub const ELBOW_LOSS_COEFF: f64 = 0.45;

/// Combined loss coefficient of the fixed circuit fittings: two tees, two
/// isolation valves and the two buffer-tank flanges present in every loop.
pub const FIXED_FITTINGS_COEFF: f64 = 4.5;

/// Velocity head v²/2g, in meters of water column.
pub fn velocity_head_m(velocity_m_s: f64) -> f64 {
    velocity_m_s * velocity_m_s / (2.0 * G_MPS2)
}

/// Linear head loss per meter of straight pipe, f·v²/(2·g·D), in mCE/m.
pub fn linear_loss_per_meter(friction_factor: f64, bore_m: f64, velocity_m_s: f64) -> f64 {
    friction_factor * velocity_m_s * velocity_m_s / (2.0 * G_MPS2 * bore_m)
}

/// Breakdown of the localized losses charged against the available head.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SingularLosses {
    /// 90° elbows
    pub elbows_mce: f64,
    /// Fixed fitting set (tees, isolation valves, flanges)
    pub fixed_fittings_mce: f64,
    /// Filter + check-valve assembly, from its summed ζ
    pub filter_check_valve_mce: f64,
    /// Caller-declared additional loss
    pub extra_mce: f64,
}

impl SingularLosses {
    pub fn evaluate(
        velocity_head_m: f64,
        elbow_count: u32,
        filter_check_valve_zeta: f64,
        extra_mce: f64,
    ) -> SingularLosses {
        SingularLosses {
            elbows_mce: velocity_head_m * f64::from(elbow_count) * ELBOW_LOSS_COEFF,
            fixed_fittings_mce: velocity_head_m * FIXED_FITTINGS_COEFF,
            filter_check_valve_mce: velocity_head_m * filter_check_valve_zeta,
            extra_mce,
        }
    }

    /// Total singular loss. The extra loss counts like every other term.
    pub fn total_mce(&self) -> f64 {
        self.elbows_mce + self.fixed_fittings_mce + self.filter_check_valve_mce + self.extra_mce
    }
}

/// Pipe run length the head left after singular losses can sustain.
///
/// Negative when the singular losses alone exceed the available head; the
/// value is returned as-is so callers can surface the infeasibility instead
/// of a silently clamped zero.
pub fn sizable_length_m(
    available_head_m: f64,
    singular: &SingularLosses,
    linear_loss_mce_per_m: f64,
) -> f64 {
    (available_head_m - singular.total_mce()) / linear_loss_mce_per_m
}
