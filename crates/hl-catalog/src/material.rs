//! Pipe material definitions.

use hl_core::units::{Length, mm};

/// Roughness assumed when the caller does not select a material.
///
/// Matches the value historically hardcoded by the simplified sizing sheet,
/// kept for compatibility with existing circuit records.
pub const LEGACY_ROUGHNESS_MM: f64 = 0.0045;

/// Roughness for callers that do not select a material.
#[inline]
pub fn legacy_roughness() -> Length {
    mm(LEGACY_ROUGHNESS_MM)
}

/// Pipe materials with published absolute roughness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeMaterial {
    /// Copper
    Copper,
    /// Galvanized steel
    GalvanizedSteel,
    /// Stainless steel
    StainlessSteel,
    /// Cast iron
    CastIron,
    /// PVC
    Pvc,
    /// High-density polyethylene
    Pehd,
}

impl PipeMaterial {
    pub const ALL: [PipeMaterial; 6] = [
        PipeMaterial::Copper,
        PipeMaterial::GalvanizedSteel,
        PipeMaterial::StainlessSteel,
        PipeMaterial::CastIron,
        PipeMaterial::Pvc,
        PipeMaterial::Pehd,
    ];

    /// Absolute roughness of commercial pipe in this material.
    pub fn roughness(&self) -> Length {
        let roughness_mm = match self {
            PipeMaterial::Copper => 0.0015,
            PipeMaterial::GalvanizedSteel => 0.015,
            PipeMaterial::StainlessSteel => 0.002,
            PipeMaterial::CastIron => 0.26,
            PipeMaterial::Pvc => 0.0015,
            PipeMaterial::Pehd => 0.007,
        };
        mm(roughness_mm)
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PipeMaterial::Copper => "Copper",
            PipeMaterial::GalvanizedSteel => "Galvanized steel",
            PipeMaterial::StainlessSteel => "Stainless steel",
            PipeMaterial::CastIron => "Cast iron",
            PipeMaterial::Pvc => "PVC",
            PipeMaterial::Pehd => "PEHD",
        }
    }
}

impl std::str::FromStr for PipeMaterial {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // French aliases kept from the original installer datasheets.
        match s.trim().to_uppercase().as_str() {
            "COPPER" | "CUIVRE" => Ok(PipeMaterial::Copper),
            "GALVANIZED STEEL" | "GALVANIZED" | "ACIER GALVANISÉ" | "ACIER GALVANISE" => {
                Ok(PipeMaterial::GalvanizedSteel)
            }
            "STAINLESS STEEL" | "STAINLESS" | "ACIER INOXYDABLE" | "INOX" => {
                Ok(PipeMaterial::StainlessSteel)
            }
            "CAST IRON" | "FONTE" => Ok(PipeMaterial::CastIron),
            "PVC" => Ok(PipeMaterial::Pvc),
            "PEHD" | "HDPE" => Ok(PipeMaterial::Pehd),
            _ => Err("unknown pipe material"),
        }
    }
}
