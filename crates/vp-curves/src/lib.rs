//! vp-curves: boiling-point prediction and curve sampling for vaporpoint.
//!
//! Provides:
//! - `clausius`: the integrated Clausius-Clapeyron relation mapping a target
//!   pressure and one known reference state to a predicted boiling point
//! - `sweep`: validated linear pressure sampling over an interval
//! - `generator`: one curve point per sample, in sampling order
//!
//! # Architecture
//!
//! The equation is a pure function of its inputs; the sweep owns the
//! sampling policy; the generator glues the two around a resolved
//! `CompoundRecord`. Nothing here touches I/O, so a curve for identical
//! inputs is always identical.
//!
//! # Example
//!
//! ```
//! use vp_compounds::CompoundRecord;
//! use vp_curves::{PressureSweep, generate_curve};
//!
//! let water = CompoundRecord {
//!     name: "Water".to_string(),
//!     vapor_enthalpy_kj_mol: 40.65,
//!     reference_boiling_point_c: 100.0,
//!     reference_pressure_torr: 760.0,
//! };
//!
//! let sweep = PressureSweep::new(1.0, 760.0, 100).unwrap();
//! let curve = generate_curve(&water, &sweep).unwrap();
//! assert_eq!(curve.len(), 100);
//! ```

pub mod clausius;
pub mod curve;
pub mod error;
pub mod generator;
pub mod sweep;

// Re-exports for ergonomics
pub use clausius::{boiling_point_at, predict_boiling_point};
pub use curve::{Curve, CurvePoint};
pub use error::{CurveError, EquationError, InvalidRangeError};
pub use generator::{generate_curve, generate_curve_over};
pub use sweep::PressureSweep;
