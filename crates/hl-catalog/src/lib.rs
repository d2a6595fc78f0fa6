//! hl-catalog: read-only reference data for hydroloop.
//!
//! Provides:
//! - Heat-pump model definitions with nominal flow rate and available head
//! - Pipe material definitions with absolute roughness
//! - The discrete set of supported pipe bores
//! - Working-fluid properties
//!
//! All data here is `'static` and immutable after process start. The sizing
//! core receives values from these tables as explicit inputs; nothing in the
//! calculation path reads them ambiently, so the tables are safe to share
//! across concurrent requests without locking.

pub mod diameter;
pub mod fluid;
pub mod material;
pub mod pump;

pub use diameter::PipeDiameter;
pub use material::PipeMaterial;
pub use pump::{PumpDuty, PumpModel};
