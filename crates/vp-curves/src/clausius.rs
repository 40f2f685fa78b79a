//! Integrated Clausius-Clapeyron relation.
//!
//! Maps a target pressure and one known reference state (P2, T2, H_vap) to a
//! predicted boiling temperature, assuming H_vap is constant over the range.
//! That assumption is a modeling approximation: predictions far from the
//! reference pressure should not be read as accurate.

use crate::error::EquationError;
use vp_compounds::CompoundRecord;
use vp_core::units::constants::{GAS_CONSTANT_KJ_PER_MOL_K, PRESSURE_FLOOR_TORR};
use vp_core::units::{celsius_to_kelvin, kelvin_to_celsius};

/// Predicted boiling point in deg C at `pressure_torr`.
///
/// `pressure_torr` may be any value, including zero or negative: it is
/// clamped to [`PRESSURE_FLOOR_TORR`] before the logarithm, so near-zero and
/// invalid pressures degrade to the floor's finite result instead of failing.
///
/// The relation solved is
///
/// ```text
/// 1/T1 = 1/T2 - (R / H_vap) * ln(P / P2)
/// ```
///
/// with `R = 8.314e-3` kJ/(mol K) and temperatures absolute. When the right
/// hand side reaches zero or goes negative the relation has left its physical
/// domain and [`EquationError::SingularPressure`] is returned; the function
/// never yields NaN or infinity.
pub fn predict_boiling_point(
    pressure_torr: f64,
    reference_pressure_torr: f64,
    reference_boiling_point_c: f64,
    vapor_enthalpy_kj_mol: f64,
) -> Result<f64, EquationError> {
    if !(vapor_enthalpy_kj_mol.is_finite() && vapor_enthalpy_kj_mol > 0.0) {
        return Err(EquationError::InvalidReference {
            what: "vaporization enthalpy",
            requirement: "finite and > 0",
            value: vapor_enthalpy_kj_mol,
        });
    }
    if !(reference_pressure_torr.is_finite() && reference_pressure_torr > 0.0) {
        return Err(EquationError::InvalidReference {
            what: "pressure",
            requirement: "finite and > 0",
            value: reference_pressure_torr,
        });
    }
    let t2_k = celsius_to_kelvin(reference_boiling_point_c);
    if !(t2_k.is_finite() && t2_k > 0.0) {
        return Err(EquationError::InvalidReference {
            what: "boiling point",
            requirement: "finite and above absolute zero",
            value: reference_boiling_point_c,
        });
    }

    // NaN also falls through to the floor here
    let clamped_torr = pressure_torr.max(PRESSURE_FLOOR_TORR);

    let inv_t1_k = 1.0 / t2_k
        - (GAS_CONSTANT_KJ_PER_MOL_K / vapor_enthalpy_kj_mol)
            * (clamped_torr / reference_pressure_torr).ln();

    if !inv_t1_k.is_finite() || inv_t1_k <= 0.0 {
        return Err(EquationError::SingularPressure { pressure_torr });
    }

    Ok(kelvin_to_celsius(1.0 / inv_t1_k))
}

/// [`predict_boiling_point`] over a resolved compound record.
pub fn boiling_point_at(
    pressure_torr: f64,
    record: &CompoundRecord,
) -> Result<f64, EquationError> {
    predict_boiling_point(
        pressure_torr,
        record.reference_pressure_torr,
        record.reference_boiling_point_c,
        record.vapor_enthalpy_kj_mol,
    )
}
