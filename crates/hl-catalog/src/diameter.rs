//! Supported pipe bores.

use hl_core::units::{Length, mm};

/// Internal pipe diameters the condenser loop may be built with.
///
/// The set is discrete: these are the bores of the piping kits shipped with
/// the heat pumps, not a free parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeDiameter {
    /// 33 mm bore
    D33,
    /// 40 mm bore
    D40,
    /// 50 mm bore
    D50,
    /// 66 mm bore
    D66,
    /// 80 mm bore
    D80,
}

impl PipeDiameter {
    pub const ALL: [PipeDiameter; 5] = [
        PipeDiameter::D33,
        PipeDiameter::D40,
        PipeDiameter::D50,
        PipeDiameter::D66,
        PipeDiameter::D80,
    ];

    pub fn millimeters(&self) -> u32 {
        match self {
            PipeDiameter::D33 => 33,
            PipeDiameter::D40 => 40,
            PipeDiameter::D50 => 50,
            PipeDiameter::D66 => 66,
            PipeDiameter::D80 => 80,
        }
    }

    /// Bore as an SI length.
    pub fn bore(&self) -> Length {
        mm(f64::from(self.millimeters()))
    }

    /// Look up a bore from a millimetre value; anything outside the
    /// supported set is rejected.
    pub fn from_millimeters(value: u32) -> Option<PipeDiameter> {
        PipeDiameter::ALL
            .into_iter()
            .find(|d| d.millimeters() == value)
    }
}
