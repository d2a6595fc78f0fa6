//! Heat-pump model definitions.

use hl_core::units::{Length, VolumeRate, m, m3h};

/// Condenser-loop duty point of a pump: what the pump delivers at its
/// nominal operating point and how much head remains for the pipe run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpDuty {
    /// Nominal volumetric flow rate
    pub flow_rate: VolumeRate,
    /// Head available for the circuit after internal losses
    pub available_head: Length,
}

/// Heat-pump models with a known condenser-loop duty point.
///
/// The `Dual*`/`Triple*` variants are cascade installations of two or three
/// identical units on a common loop: flow rates add, available head stays
/// that of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PumpModel {
    /// MMTC 20
    Mmtc20,
    /// MMTC 26
    Mmtc26,
    /// MMTC 33
    Mmtc33,
    /// MMTC 40
    Mmtc40,
    /// MHTC 20
    Mhtc20,
    /// MHTC 30
    Mhtc30,
    /// 2 x MMTC 20
    DualMmtc20,
    /// 2 x MMTC 26
    DualMmtc26,
    /// 2 x MMTC 33
    DualMmtc33,
    /// 2 x MMTC 40
    DualMmtc40,
    /// 3 x MMTC 20
    TripleMmtc20,
    /// 3 x MMTC 26
    TripleMmtc26,
    /// 3 x MMTC 33
    TripleMmtc33,
    /// 3 x MMTC 40
    TripleMmtc40,
}

impl PumpModel {
    pub const ALL: [PumpModel; 14] = [
        PumpModel::Mmtc20,
        PumpModel::Mmtc26,
        PumpModel::Mmtc33,
        PumpModel::Mmtc40,
        PumpModel::Mhtc20,
        PumpModel::Mhtc30,
        PumpModel::DualMmtc20,
        PumpModel::DualMmtc26,
        PumpModel::DualMmtc33,
        PumpModel::DualMmtc40,
        PumpModel::TripleMmtc20,
        PumpModel::TripleMmtc26,
        PumpModel::TripleMmtc33,
        PumpModel::TripleMmtc40,
    ];

    /// Canonical catalog key, as printed on the datasheet.
    pub fn key(&self) -> &'static str {
        match self {
            PumpModel::Mmtc20 => "MMTC 20",
            PumpModel::Mmtc26 => "MMTC 26",
            PumpModel::Mmtc33 => "MMTC 33",
            PumpModel::Mmtc40 => "MMTC 40",
            PumpModel::Mhtc20 => "MHTC 20",
            PumpModel::Mhtc30 => "MHTC 30",
            PumpModel::DualMmtc20 => "2 x MMTC 20",
            PumpModel::DualMmtc26 => "2 x MMTC 26",
            PumpModel::DualMmtc33 => "2 x MMTC 33",
            PumpModel::DualMmtc40 => "2 x MMTC 40",
            PumpModel::TripleMmtc20 => "3 x MMTC 20",
            PumpModel::TripleMmtc26 => "3 x MMTC 26",
            PumpModel::TripleMmtc33 => "3 x MMTC 33",
            PumpModel::TripleMmtc40 => "3 x MMTC 40",
        }
    }

    /// Nominal flow rate and available head at the condenser loop.
    pub fn duty(&self) -> PumpDuty {
        let (flow_m3h, head_m) = match self {
            PumpModel::Mmtc20 => (3.68, 6.3),
            PumpModel::Mmtc26 => (4.72, 3.2),
            PumpModel::Mmtc33 => (5.79, 5.5),
            PumpModel::Mmtc40 => (6.98, 2.8),
            PumpModel::Mhtc20 => (3.5, 6.4),
            PumpModel::Mhtc30 => (5.24, 4.4),
            PumpModel::DualMmtc20 => (7.36, 6.3),
            PumpModel::DualMmtc26 => (9.44, 3.2),
            PumpModel::DualMmtc33 => (11.58, 5.5),
            PumpModel::DualMmtc40 => (13.96, 2.8),
            PumpModel::TripleMmtc20 => (11.04, 6.3),
            PumpModel::TripleMmtc26 => (14.16, 3.2),
            PumpModel::TripleMmtc33 => (17.37, 5.5),
            PumpModel::TripleMmtc40 => (20.94, 2.8),
        };
        PumpDuty {
            flow_rate: m3h(flow_m3h),
            available_head: m(head_m),
        }
    }
}

impl std::str::FromStr for PumpModel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Datasheet keys contain spacing that users rarely reproduce exactly.
        let normalized: String = s
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "MMTC20" => Ok(PumpModel::Mmtc20),
            "MMTC26" => Ok(PumpModel::Mmtc26),
            "MMTC33" => Ok(PumpModel::Mmtc33),
            "MMTC40" => Ok(PumpModel::Mmtc40),
            "MHTC20" => Ok(PumpModel::Mhtc20),
            "MHTC30" => Ok(PumpModel::Mhtc30),
            "2XMMTC20" => Ok(PumpModel::DualMmtc20),
            "2XMMTC26" => Ok(PumpModel::DualMmtc26),
            "2XMMTC33" => Ok(PumpModel::DualMmtc33),
            "2XMMTC40" => Ok(PumpModel::DualMmtc40),
            "3XMMTC20" => Ok(PumpModel::TripleMmtc20),
            "3XMMTC26" => Ok(PumpModel::TripleMmtc26),
            "3XMMTC33" => Ok(PumpModel::TripleMmtc33),
            "3XMMTC40" => Ok(PumpModel::TripleMmtc40),
            _ => Err("unknown pump model"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hl_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn duty_lookup() {
        let tol = Tolerances::default();
        let duty = PumpModel::Mmtc20.duty();
        assert!(nearly_equal(duty.flow_rate.value, 3.68 / 3600.0, tol));
        assert!(nearly_equal(duty.available_head.value, 6.3, tol));

        let duty = PumpModel::TripleMmtc40.duty();
        assert!(nearly_equal(duty.flow_rate.value, 20.94 / 3600.0, tol));
        assert!(nearly_equal(duty.available_head.value, 2.8, tol));
    }

    #[test]
    fn cascade_flow_is_multiple_of_single_unit() {
        let tol = Tolerances::default();
        let single = PumpModel::Mmtc20.duty();
        let dual = PumpModel::DualMmtc20.duty();
        let triple = PumpModel::TripleMmtc20.duty();
        assert!(nearly_equal(dual.flow_rate.value, 2.0 * single.flow_rate.value, tol));
        assert!(nearly_equal(triple.flow_rate.value, 3.0 * single.flow_rate.value, tol));
        assert!(nearly_equal(dual.available_head.value, single.available_head.value, tol));
    }

    #[test]
    fn parse_accepts_loose_spacing() {
        assert_eq!("MMTC 20".parse::<PumpModel>().unwrap(), PumpModel::Mmtc20);
        assert_eq!("mmtc20".parse::<PumpModel>().unwrap(), PumpModel::Mmtc20);
        assert_eq!(
            "2 x MMTC 33".parse::<PumpModel>().unwrap(),
            PumpModel::DualMmtc33
        );
        assert_eq!(
            "3x mmtc 40".parse::<PumpModel>().unwrap(),
            PumpModel::TripleMmtc40
        );
    }

    #[test]
    fn parse_rejects_unknown_model() {
        assert!("MMTC 99".parse::<PumpModel>().is_err());
        assert!("".parse::<PumpModel>().is_err());
    }

    #[test]
    fn canonical_key_roundtrip() {
        for model in PumpModel::ALL {
            let parsed = model
                .key()
                .parse::<PumpModel>()
                .expect("canonical key should parse");
            assert_eq!(parsed, model);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_ignores_case_and_surrounding_whitespace(
            idx in 0usize..PumpModel::ALL.len(),
            left in 0usize..4,
            right in 0usize..4,
        ) {
            let model = PumpModel::ALL[idx];
            let s = format!(
                "{}{}{}",
                " ".repeat(left),
                model.key().to_lowercase(),
                " ".repeat(right)
            );
            prop_assert_eq!(s.parse::<PumpModel>().unwrap(), model);
        }
    }
}
