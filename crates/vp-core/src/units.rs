// vp-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn torr(v: f64) -> Pressure {
    Pressure::new::<uom::si::pressure::torr>(v)
}

#[inline]
pub fn kelvin(v: f64) -> Temperature {
    Temperature::new::<uom::si::thermodynamic_temperature::kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    Temperature::new::<uom::si::thermodynamic_temperature::degree_celsius>(v)
}

pub mod constants {
    /// Ideal-gas constant in kJ/(mol K), matching enthalpies carried in kJ/mol.
    pub const GAS_CONSTANT_KJ_PER_MOL_K: f64 = 8.314e-3;

    /// Offset between Celsius and Kelvin scales.
    pub const KELVIN_OFFSET_C: f64 = 273.15;

    /// Floor applied to target pressures before the logarithm term.
    /// Anything at or below zero torr degrades to this value's result.
    pub const PRESSURE_FLOOR_TORR: f64 = 1e-9;
}

#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + constants::KELVIN_OFFSET_C
}

#[inline]
pub fn kelvin_to_celsius(t_k: f64) -> f64 {
    t_k - constants::KELVIN_OFFSET_C
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::pressure::pascal;
    use uom::si::thermodynamic_temperature::kelvin as kelvin_unit;

    #[test]
    fn constructors_smoke() {
        let _p = torr(760.0);
        let _t = kelvin(300.0);
        let _t2 = celsius(100.0);
    }

    #[test]
    fn torr_converts_to_pascal() {
        // 760 torr is one standard atmosphere
        let p = torr(760.0);
        assert!((p.get::<pascal>() - 101_325.0).abs() < 0.5);
    }

    #[test]
    fn celsius_carries_kelvin_offset() {
        let t = celsius(100.0);
        assert!((t.get::<kelvin_unit>() - 373.15).abs() < 1e-9);
        assert!((celsius_to_kelvin(100.0) - 373.15).abs() < 1e-12);
        assert!((kelvin_to_celsius(373.15) - 100.0).abs() < 1e-12);
    }
}
