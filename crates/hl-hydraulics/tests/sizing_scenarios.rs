//! End-to-end sizing scenarios through the public API.

use hl_catalog::{PipeDiameter, PipeMaterial, PumpDuty, PumpModel};
use hl_core::units::{m, m3h, mm};
use hl_hydraulics::friction::{RESIDUAL_TOLERANCE, colebrook_residual};
use hl_hydraulics::{CircuitConfiguration, HydraulicError, SizingOutcome, size_circuit};

fn size(config: CircuitConfiguration) -> SizingOutcome {
    size_circuit(&config).unwrap()
}

#[test]
fn mmtc20_copper_33mm_sizes_a_real_run() {
    let config = CircuitConfiguration::new(
        PumpModel::Mmtc20,
        PipeDiameter::D33,
        Some(PipeMaterial::Copper),
        2,
        0.0,
        0.0,
    )
    .unwrap();

    let report = match size(config) {
        SizingOutcome::Turbulent(report) => report,
        SizingOutcome::Laminar(_) => panic!("expected turbulent regime"),
    };

    assert!((report.velocity_m_s - 1.1952).abs() < 1e-3);
    assert!(report.reynolds > 2000.0);

    // The returned friction factor must actually satisfy Colebrook-White
    let residual = colebrook_residual(report.friction_factor, 1.5e-6, 0.033, report.reynolds);
    assert!(residual.abs() < RESIDUAL_TOLERANCE);

    assert!(report.feasible);
    assert!(report.sizable_length_m.is_finite());
    assert!(report.sizable_length_m > 0.0);
}

#[test]
fn widening_the_bore_drops_the_velocity() {
    let narrow = CircuitConfiguration::new(
        PumpModel::Mmtc20,
        PipeDiameter::D33,
        Some(PipeMaterial::Copper),
        2,
        0.0,
        0.0,
    )
    .unwrap();
    let wide = CircuitConfiguration::new(
        PumpModel::Mmtc20,
        PipeDiameter::D80,
        Some(PipeMaterial::Copper),
        2,
        0.0,
        0.0,
    )
    .unwrap();

    let v_narrow = match size(narrow) {
        SizingOutcome::Turbulent(r) => r.velocity_m_s,
        SizingOutcome::Laminar(r) => r.velocity_m_s,
    };
    let v_wide = match size(wide) {
        SizingOutcome::Turbulent(r) => r.velocity_m_s,
        SizingOutcome::Laminar(r) => r.velocity_m_s,
    };

    // v scales with 1/D²: 33 mm → 80 mm is roughly a 5.9x drop
    assert!(v_wide < v_narrow / 5.0);
    assert!((v_wide - 0.2034).abs() < 1e-3);
}

#[test]
fn laminar_duty_reports_regime_instead_of_length() {
    let duty = PumpDuty {
        flow_rate: m3h(0.1),
        available_head: m(5.0),
    };
    let config =
        CircuitConfiguration::with_duty(duty, PipeDiameter::D80, mm(0.0045), 1, 0.0, 0.0).unwrap();

    match size(config) {
        SizingOutcome::Laminar(report) => {
            assert!(report.reynolds <= 2000.0);
        }
        SizingOutcome::Turbulent(_) => panic!("expected laminar regime"),
    }
}

#[test]
fn overloaded_low_head_pump_is_infeasible_not_clamped() {
    let config = CircuitConfiguration::new(
        PumpModel::Mmtc40,
        PipeDiameter::D33,
        Some(PipeMaterial::Copper),
        10,
        50.0,
        5.0,
    )
    .unwrap();

    let report = match size(config) {
        SizingOutcome::Turbulent(report) => report,
        SizingOutcome::Laminar(_) => panic!("expected turbulent regime"),
    };

    assert!(!report.feasible);
    assert!(report.sizable_length_m < 0.0, "length must not be clamped");
}

#[test]
fn unknown_pump_name_never_reaches_the_core() {
    let parsed = "MMTC 99".parse::<PumpModel>();
    assert!(parsed.is_err());
}

#[test]
fn each_material_yields_a_consistent_turbulent_solve() {
    for material in PipeMaterial::ALL {
        let config = CircuitConfiguration::new(
            PumpModel::DualMmtc33,
            PipeDiameter::D50,
            Some(material),
            3,
            1.5,
            0.2,
        )
        .unwrap();

        let report = match size(config) {
            SizingOutcome::Turbulent(report) => report,
            SizingOutcome::Laminar(_) => panic!("expected turbulent regime"),
        };

        let residual = colebrook_residual(
            report.friction_factor,
            material.roughness().value,
            0.050,
            report.reynolds,
        );
        assert!(
            residual.abs() < RESIDUAL_TOLERANCE,
            "{} violates Colebrook-White",
            material.display_name()
        );
    }
}

#[test]
fn rougher_material_shortens_the_run() {
    let smooth = CircuitConfiguration::new(
        PumpModel::Mmtc33,
        PipeDiameter::D40,
        Some(PipeMaterial::Copper),
        2,
        0.0,
        0.0,
    )
    .unwrap();
    let rough = CircuitConfiguration::new(
        PumpModel::Mmtc33,
        PipeDiameter::D40,
        Some(PipeMaterial::CastIron),
        2,
        0.0,
        0.0,
    )
    .unwrap();

    let (smooth, rough) = match (size(smooth), size(rough)) {
        (SizingOutcome::Turbulent(a), SizingOutcome::Turbulent(b)) => (a, b),
        _ => panic!("expected turbulent regime"),
    };

    assert!(rough.friction_factor > smooth.friction_factor);
    assert!(rough.sizable_length_m < smooth.sizable_length_m);
}

#[test]
fn invalid_configurations_fail_before_any_computation() {
    let err = CircuitConfiguration::new(PumpModel::Mmtc20, PipeDiameter::D33, None, 0, 0.0, 0.0)
        .unwrap_err();
    assert!(matches!(err, HydraulicError::InvalidConfig { .. }));

    let err = CircuitConfiguration::new(
        PumpModel::Mmtc20,
        PipeDiameter::D33,
        None,
        2,
        f64::NAN,
        0.0,
    )
    .unwrap_err();
    assert!(matches!(err, HydraulicError::InvalidConfig { .. }));
}
