//! vp-compounds: compound reference data for vaporpoint.
//!
//! Provides:
//! - `CompoundRecord`: one compound's reference triple (H_vap, T2, P2)
//! - `CompoundRepository`: name-indexed, read-only access to a loaded table
//! - `SharedRepository`: at-most-once lazy loading for multi-threaded hosts
//!
//! The external contract is a CSV table keyed by an `Item` column with three
//! numeric columns for vaporization enthalpy (kJ/mol), reference boiling
//! point (deg C), and reference pressure (torr). The table is read once and
//! treated as immutable for the rest of the session.

pub mod error;
pub mod record;
pub mod repository;
pub mod shared;

// Re-exports for ergonomics
pub use error::{DataSourceError, NotFoundError};
pub use record::CompoundRecord;
pub use repository::{CompoundRepository, REQUIRED_COLUMNS};
pub use shared::SharedRepository;
