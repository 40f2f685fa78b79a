//! Curve and equation errors.

use thiserror::Error;
use vp_core::VpError;

/// Errors from the Clausius-Clapeyron relation itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    /// Reference triple violates an invariant (non-finite, non-positive
    /// pressure or enthalpy, or a reference state below absolute zero).
    #[error("Reference {what} must be {requirement}, got {value}")]
    InvalidReference {
        what: &'static str,
        requirement: &'static str,
        value: f64,
    },

    /// The bracketed denominator reached zero or went negative: the target
    /// pressure sits at or beyond the relation's pole for this compound.
    #[error("Pressure {pressure_torr} torr is at or beyond the relation's singularity")]
    SingularPressure { pressure_torr: f64 },
}

/// A malformed sample request. Recoverable; callers should re-validate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidRangeError {
    #[error("A curve needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },

    #[error("Pressure interval is inverted: min {min_torr} torr > max {max_torr} torr")]
    InvertedInterval { min_torr: f64, max_torr: f64 },

    #[error("Pressure bound {what} must be finite, got {value}")]
    NonFiniteBound { what: &'static str, value: f64 },
}

/// Curve generation failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error(transparent)]
    Range(#[from] InvalidRangeError),

    #[error("Curve point {index} (at {pressure_torr} torr) failed: {source}")]
    PointFailed {
        index: usize,
        pressure_torr: f64,
        #[source]
        source: EquationError,
    },
}

impl From<EquationError> for VpError {
    // Convert to VpError while preserving the offender
    fn from(err: EquationError) -> Self {
        match err {
            EquationError::InvalidReference { what, .. } => VpError::InvalidArg { what },
            EquationError::SingularPressure { pressure_torr } => VpError::NonFinite {
                what: "boiling point at singular pressure",
                value: pressure_torr,
            },
        }
    }
}

impl From<InvalidRangeError> for VpError {
    fn from(err: InvalidRangeError) -> Self {
        match err {
            InvalidRangeError::TooFewSamples { .. } => VpError::InvalidArg {
                what: "a curve needs at least 2 samples",
            },
            InvalidRangeError::InvertedInterval { .. } => VpError::InvalidArg {
                what: "pressure interval is inverted",
            },
            InvalidRangeError::NonFiniteBound { what, value } => {
                VpError::NonFinite { what, value }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InvalidRangeError::TooFewSamples { samples: 1 };
        assert!(err.to_string().contains("at least 2"));

        let err = CurveError::PointFailed {
            index: 7,
            pressure_torr: 1.0e9,
            source: EquationError::SingularPressure {
                pressure_torr: 1.0e9,
            },
        };
        assert!(err.to_string().contains("point 7"));
    }

    #[test]
    fn error_to_vp_error() {
        let eq_err = EquationError::InvalidReference {
            what: "vaporization enthalpy",
            requirement: "finite and > 0",
            value: 0.0,
        };
        let vp_err: VpError = eq_err.into();
        assert!(matches!(vp_err, VpError::InvalidArg { .. }));

        let range_err = InvalidRangeError::NonFiniteBound {
            what: "min",
            value: f64::NAN,
        };
        let vp_err: VpError = range_err.into();
        assert!(matches!(vp_err, VpError::NonFinite { .. }));
    }
}
