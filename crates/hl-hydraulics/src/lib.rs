//! hl-hydraulics: the condenser-loop sizing core.
//!
//! Provides:
//! - Flow velocity and Reynolds number for a circular bore (`flow`)
//! - Laminar/turbulent gating (`regime`)
//! - Colebrook-White friction factor solve (`friction`)
//! - Linear and singular head losses (`losses`)
//! - The one-shot request pipeline (`sizing`)
//!
//! # Architecture
//!
//! A request flows through exactly one pass: velocity and Reynolds number
//! are always computed, the regime gate either terminates with a laminar
//! report or hands over to the friction solve, and the head-loss budget
//! turns the remaining head into a pipe run length. Requests are
//! independent; the catalog tables feeding them are immutable.
//!
//! # Example
//!
//! ```
//! use hl_catalog::{PipeDiameter, PipeMaterial, PumpModel};
//! use hl_hydraulics::{CircuitConfiguration, SizingOutcome, size_circuit};
//!
//! # fn main() -> Result<(), hl_hydraulics::HydraulicError> {
//! let config = CircuitConfiguration::new(
//!     PumpModel::Mmtc20,
//!     PipeDiameter::D33,
//!     Some(PipeMaterial::Copper),
//!     2,   // elbows
//!     0.0, // filter + check-valve ζ
//!     0.0, // extra loss (mCE)
//! )?;
//!
//! match size_circuit(&config)? {
//!     SizingOutcome::Turbulent(report) => {
//!         println!("max run: {:.1} m", report.sizable_length_m);
//!     }
//!     SizingOutcome::Laminar(report) => {
//!         println!("laminar at Re = {:.0}", report.reynolds);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod flow;
pub mod friction;
pub mod losses;
pub mod regime;
pub mod sizing;

pub use error::{HydraulicError, HydraulicResult};
pub use flow::FlowConditions;
pub use friction::solve_friction_factor;
pub use losses::SingularLosses;
pub use regime::FlowRegime;
pub use sizing::{
    CircuitConfiguration, LaminarReport, SizingOutcome, SizingReport, size_circuit,
};
