//! Laminar/turbulent gate.

use serde::Serialize;

/// Reynolds number at or below which the flow is treated as laminar.
pub const LAMINAR_REYNOLDS_MAX: f64 = 2000.0;

/// Flow regime of a sizing request.
///
/// The Colebrook-White correlation is meaningless below the turbulence
/// threshold, so the regime is decided before any friction work and the
/// laminar branch terminates the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    pub fn classify(reynolds: f64) -> FlowRegime {
        if reynolds > LAMINAR_REYNOLDS_MAX {
            FlowRegime::Turbulent
        } else {
            FlowRegime::Laminar
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}
