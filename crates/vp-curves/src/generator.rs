//! Curve generation: one equation evaluation per sampled pressure.

use crate::clausius;
use crate::curve::{Curve, CurvePoint};
use crate::error::CurveError;
use crate::sweep::PressureSweep;
use vp_compounds::CompoundRecord;

/// Sample the boiling-point relation over `sweep` for one compound.
///
/// Every sampled pressure is mapped through the Clausius-Clapeyron relation
/// with the record's reference triple. A sample at or beyond the relation's
/// singularity aborts generation, reporting the failing point index.
/// Identical inputs always produce an identical curve.
pub fn generate_curve(
    record: &CompoundRecord,
    sweep: &PressureSweep,
) -> Result<Curve, CurveError> {
    let pressures = sweep.points();
    let mut points = Vec::with_capacity(pressures.len());

    for (index, &pressure_torr) in pressures.iter().enumerate() {
        let temperature_c =
            clausius::boiling_point_at(pressure_torr, record).map_err(|source| {
                CurveError::PointFailed {
                    index,
                    pressure_torr,
                    source,
                }
            })?;
        points.push(CurvePoint::new(pressure_torr, temperature_c));
    }

    Ok(Curve::new(record.name.clone(), points))
}

/// [`generate_curve`] over raw interval bounds, validating them first.
pub fn generate_curve_over(
    record: &CompoundRecord,
    min_torr: f64,
    max_torr: f64,
    samples: usize,
) -> Result<Curve, CurveError> {
    let sweep = PressureSweep::new(min_torr, max_torr, samples)?;
    generate_curve(record, &sweep)
}
