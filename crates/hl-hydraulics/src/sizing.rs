//! End-to-end sizing pipeline: one request in, one outcome out.

use hl_catalog::fluid::KINEMATIC_VISCOSITY_M2PS;
use hl_catalog::material;
use hl_catalog::{PipeDiameter, PipeMaterial, PumpDuty, PumpModel};
use hl_core::units::Length;
use serde::Serialize;
use tracing::debug;

use crate::error::{HydraulicError, HydraulicResult};
use crate::flow::FlowConditions;
use crate::friction::solve_friction_factor;
use crate::losses::{self, SingularLosses};
use crate::regime::FlowRegime;

pub const ELBOW_COUNT_MIN: u32 = 1;
pub const ELBOW_COUNT_MAX: u32 = 10;

/// Inputs of one sizing request.
///
/// Immutable once constructed; construction validates every bound so the
/// pipeline itself never sees an out-of-range value. Each request owns its
/// configuration and nothing outlives the request.
#[derive(Debug, Clone, Copy)]
pub struct CircuitConfiguration {
    duty: PumpDuty,
    diameter: PipeDiameter,
    roughness: Length,
    elbow_count: u32,
    filter_check_valve_zeta: f64,
    extra_loss_mce: f64,
}

impl CircuitConfiguration {
    /// Configuration for a cataloged pump. Without a material the legacy
    /// roughness is assumed (see `hl_catalog::material`).
    pub fn new(
        pump: PumpModel,
        diameter: PipeDiameter,
        pipe_material: Option<PipeMaterial>,
        elbow_count: u32,
        filter_check_valve_zeta: f64,
        extra_loss_mce: f64,
    ) -> HydraulicResult<Self> {
        let roughness = pipe_material
            .map(|m| m.roughness())
            .unwrap_or_else(material::legacy_roughness);
        Self::with_duty(
            pump.duty(),
            diameter,
            roughness,
            elbow_count,
            filter_check_valve_zeta,
            extra_loss_mce,
        )
    }

    /// Configuration for an arbitrary duty point and explicit roughness.
    pub fn with_duty(
        duty: PumpDuty,
        diameter: PipeDiameter,
        roughness: Length,
        elbow_count: u32,
        filter_check_valve_zeta: f64,
        extra_loss_mce: f64,
    ) -> HydraulicResult<Self> {
        if !duty.flow_rate.value.is_finite() || duty.flow_rate.value <= 0.0 {
            return Err(HydraulicError::InvalidConfig {
                what: "flow rate must be positive",
            });
        }
        if !duty.available_head.value.is_finite() || duty.available_head.value <= 0.0 {
            return Err(HydraulicError::InvalidConfig {
                what: "available head must be positive",
            });
        }
        if !roughness.value.is_finite() || roughness.value < 0.0 {
            return Err(HydraulicError::InvalidConfig {
                what: "roughness must be non-negative",
            });
        }
        if !(ELBOW_COUNT_MIN..=ELBOW_COUNT_MAX).contains(&elbow_count) {
            return Err(HydraulicError::InvalidConfig {
                what: "elbow count out of range",
            });
        }
        if !filter_check_valve_zeta.is_finite() || filter_check_valve_zeta < 0.0 {
            return Err(HydraulicError::InvalidConfig {
                what: "filter/check-valve loss coefficient must be non-negative",
            });
        }
        if !extra_loss_mce.is_finite() || extra_loss_mce < 0.0 {
            return Err(HydraulicError::InvalidConfig {
                what: "extra head loss must be non-negative",
            });
        }

        Ok(Self {
            duty,
            diameter,
            roughness,
            elbow_count,
            filter_check_valve_zeta,
            extra_loss_mce,
        })
    }
}

/// Terminal outcome of the laminar branch: the correlation does not apply,
/// only the kinematics are reported.
#[derive(Debug, Clone, Serialize)]
pub struct LaminarReport {
    pub velocity_m_s: f64,
    pub reynolds: f64,
}

/// Full turbulent sizing result.
#[derive(Debug, Clone, Serialize)]
pub struct SizingReport {
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub linear_loss_mce_per_m: f64,
    pub singular_losses: SingularLosses,
    pub singular_total_mce: f64,
    /// Maximum pipe run; negative when the configuration is infeasible
    pub sizable_length_m: f64,
    /// False when singular losses alone exceed the available head
    pub feasible: bool,
}

/// What one sizing request produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "regime", rename_all = "snake_case")]
pub enum SizingOutcome {
    Laminar(LaminarReport),
    Turbulent(SizingReport),
}

impl SizingOutcome {
    pub fn regime(&self) -> FlowRegime {
        match self {
            SizingOutcome::Laminar(_) => FlowRegime::Laminar,
            SizingOutcome::Turbulent(_) => FlowRegime::Turbulent,
        }
    }
}

/// Run the sizing pipeline once.
///
/// Velocity and Reynolds number are always computed; the regime gate then
/// either terminates with a laminar report or continues through the
/// friction solve and the head-loss budget to the sizable length.
pub fn size_circuit(config: &CircuitConfiguration) -> HydraulicResult<SizingOutcome> {
    let bore = config.diameter.bore();
    let flow = FlowConditions::evaluate(config.duty.flow_rate, bore, KINEMATIC_VISCOSITY_M2PS);
    let velocity_m_s = flow.velocity.value;

    let regime = FlowRegime::classify(flow.reynolds);
    debug!(
        velocity_m_s,
        reynolds = flow.reynolds,
        regime = regime.label(),
        "flow conditions"
    );

    if regime == FlowRegime::Laminar {
        return Ok(SizingOutcome::Laminar(LaminarReport {
            velocity_m_s,
            reynolds: flow.reynolds,
        }));
    }

    let friction_factor = solve_friction_factor(config.roughness, bore, flow.reynolds)?;
    let linear_loss_mce_per_m =
        losses::linear_loss_per_meter(friction_factor, bore.value, velocity_m_s);
    let velocity_head = losses::velocity_head_m(velocity_m_s);
    let singular = SingularLosses::evaluate(
        velocity_head,
        config.elbow_count,
        config.filter_check_valve_zeta,
        config.extra_loss_mce,
    );

    let sizable_length_m = losses::sizable_length_m(
        config.duty.available_head.value,
        &singular,
        linear_loss_mce_per_m,
    );
    if !sizable_length_m.is_finite() {
        return Err(HydraulicError::NonPhysical {
            what: "sizable length",
        });
    }

    let feasible = sizable_length_m > 0.0;
    if !feasible {
        debug!(sizable_length_m, "singular losses exceed available head");
    }

    Ok(SizingOutcome::Turbulent(SizingReport {
        velocity_m_s,
        reynolds: flow.reynolds,
        friction_factor,
        linear_loss_mce_per_m,
        singular_total_mce: singular.total_mce(),
        singular_losses: singular,
        sizable_length_m,
        feasible,
    }))
}
