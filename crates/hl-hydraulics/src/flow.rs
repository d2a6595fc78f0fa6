//! Flow velocity and Reynolds number for a circular bore.

use hl_core::units::{Area, Length, Velocity, VolumeRate};

/// Cross-sectional area of a circular bore.
pub fn flow_area(bore: Length) -> Area {
    bore * bore * (std::f64::consts::PI / 4.0)
}

/// Mean flow velocity for a volumetric flow rate through a circular bore.
///
/// Caller guarantees a positive flow rate and bore; `CircuitConfiguration`
/// rejects anything else before this runs.
pub fn flow_velocity(flow_rate: VolumeRate, bore: Length) -> Velocity {
    flow_rate / flow_area(bore)
}

/// Reynolds number v·D/ν.
pub fn reynolds_number(velocity: Velocity, bore: Length, kinematic_viscosity_m2ps: f64) -> f64 {
    velocity.value * bore.value / kinematic_viscosity_m2ps
}

/// Velocity and Reynolds number of one sizing request, computed together
/// since every downstream step needs both.
#[derive(Debug, Clone, Copy)]
pub struct FlowConditions {
    pub velocity: Velocity,
    pub reynolds: f64,
}

impl FlowConditions {
    pub fn evaluate(
        flow_rate: VolumeRate,
        bore: Length,
        kinematic_viscosity_m2ps: f64,
    ) -> FlowConditions {
        let velocity = flow_velocity(flow_rate, bore);
        let reynolds = reynolds_number(velocity, bore, kinematic_viscosity_m2ps);
        FlowConditions { velocity, reynolds }
    }
}
