//! vp-core: stable foundation for vaporpoint.
//!
//! Contains:
//! - units (uom SI types + constructors for torr/Kelvin work)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VpError, VpResult};
pub use numeric::*;
pub use units::*;
