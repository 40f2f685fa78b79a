//! Sampled boiling-point curves.

use vp_core::units::{Pressure, Temperature, celsius, torr};

/// One sampled (pressure, temperature) pair.
///
/// Produced only by the generator and immutable afterwards. The raw torr and
/// deg C values are stored as computed, so `pressure_torr` returns exactly
/// the pressure that was sampled; the unit-aware accessors convert on
/// demand for callers working in other units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pressure_torr: f64,
    temperature_c: f64,
}

impl CurvePoint {
    pub(crate) fn new(pressure_torr: f64, temperature_c: f64) -> Self {
        Self {
            pressure_torr,
            temperature_c,
        }
    }

    /// The sampled pressure, exactly as generated.
    pub fn pressure_torr(&self) -> f64 {
        self.pressure_torr
    }

    /// The computed boiling point in deg C.
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn pressure(&self) -> Pressure {
        torr(self.pressure_torr)
    }

    pub fn temperature(&self) -> Temperature {
        celsius(self.temperature_c)
    }
}

/// Ordered boiling-point curve for one compound.
///
/// Points follow the sampling order, strictly increasing in pressure for a
/// non-degenerate interval. A new pressure range yields a new curve; nothing
/// mutates one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    compound: String,
    points: Vec<CurvePoint>,
}

impl Curve {
    pub(crate) fn new(compound: String, points: Vec<CurvePoint>) -> Self {
        Self { compound, points }
    }

    /// Name of the compound this curve was generated for.
    pub fn compound(&self) -> &str {
        &self.compound
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Sampled pressures in torr, in curve order.
    pub fn pressures_torr(&self) -> Vec<f64> {
        self.points.iter().map(CurvePoint::pressure_torr).collect()
    }

    /// Computed temperatures in deg C, in curve order.
    pub fn temperatures_c(&self) -> Vec<f64> {
        self.points.iter().map(CurvePoint::temperature_c).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::pressure::pascal;

    #[test]
    fn raw_values_are_exact() {
        let point = CurvePoint::new(760.0, 100.0);
        assert_eq!(point.pressure_torr(), 760.0);
        assert_eq!(point.temperature_c(), 100.0);
    }

    #[test]
    fn unit_accessors_convert() {
        let point = CurvePoint::new(760.0, 100.0);
        assert!((point.pressure().get::<pascal>() - 101_325.0).abs() < 0.5);
        assert!(
            (point
                .temperature()
                .get::<uom::si::thermodynamic_temperature::kelvin>()
                - 373.15)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn curve_exposes_ordered_columns() {
        let curve = Curve::new(
            "Water".to_string(),
            vec![CurvePoint::new(1.0, 10.0), CurvePoint::new(2.0, 20.0)],
        );
        assert_eq!(curve.compound(), "Water");
        assert_eq!(curve.len(), 2);
        assert!(!curve.is_empty());
        assert_eq!(curve.pressures_torr(), vec![1.0, 2.0]);
        assert_eq!(curve.temperatures_c(), vec![10.0, 20.0]);
        assert_eq!(curve.first().unwrap().pressure_torr(), 1.0);
        assert_eq!(curve.last().unwrap().pressure_torr(), 2.0);
    }
}
