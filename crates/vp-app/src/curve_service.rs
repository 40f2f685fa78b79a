//! Curve generation and export.

use serde::Serialize;
use vp_compounds::CompoundRepository;
use vp_curves::{Curve, PressureSweep, generate_curve};

use crate::error::AppResult;

/// One curve request as a front end poses it: a compound by name plus the
/// interval and sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveRequest<'a> {
    pub name: &'a str,
    pub min_torr: f64,
    pub max_torr: f64,
    pub samples: usize,
}

/// Resolve the compound and sample its boiling-point curve.
pub fn generate(repo: &CompoundRepository, request: &CurveRequest<'_>) -> AppResult<Curve> {
    let record = repo.lookup(request.name)?;
    let sweep = PressureSweep::new(request.min_torr, request.max_torr, request.samples)?;

    tracing::debug!(
        compound = request.name,
        min_torr = request.min_torr,
        max_torr = request.max_torr,
        samples = request.samples,
        "generating curve"
    );

    Ok(generate_curve(record, &sweep)?)
}

/// Render a curve as a two-column CSV table.
pub fn to_csv(curve: &Curve) -> String {
    let mut csv = String::from("pressure_torr,temperature_c\n");
    for point in curve.points() {
        csv.push_str(&format!(
            "{},{}\n",
            point.pressure_torr(),
            point.temperature_c()
        ));
    }
    csv
}

#[derive(Serialize)]
struct CurveExport<'a> {
    compound: &'a str,
    points: Vec<PointExport>,
}

#[derive(Serialize)]
struct PointExport {
    pressure_torr: f64,
    temperature_c: f64,
}

/// Render a curve as pretty-printed JSON.
pub fn to_json(curve: &Curve) -> AppResult<String> {
    let export = CurveExport {
        compound: curve.compound(),
        points: curve
            .points()
            .iter()
            .map(|p| PointExport {
                pressure_torr: p.pressure_torr(),
                temperature_c: p.temperature_c(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
