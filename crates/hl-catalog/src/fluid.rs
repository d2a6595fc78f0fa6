//! Working-fluid properties.

/// Kinematic viscosity of the condenser-loop working fluid (m²/s).
///
/// Fixed property of the glycol water charged in the loop at operating
/// temperature. All Reynolds numbers in the sizing core use this value.
pub const KINEMATIC_VISCOSITY_M2PS: f64 = 4.57e-7;
