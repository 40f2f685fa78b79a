//! One compound's reference state.

use crate::error::DataSourceError;
use serde::{Deserialize, Serialize};

/// Reference data for a single compound, as read from the source table.
///
/// The serde renames are the external column contract: the table is keyed by
/// `Item` and the three numeric columns carry fixed unit-bearing headers.
/// Records are immutable once loaded; the repository hands out references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundRecord {
    /// Unique compound name, the lookup key.
    #[serde(rename = "Item")]
    pub name: String,

    /// Enthalpy of vaporization H_vap in kJ/mol. Must be finite and > 0.
    #[serde(rename = "Vap Enthalpy (kJ/mol)")]
    pub vapor_enthalpy_kj_mol: f64,

    /// Boiling point in deg C measured at the reference pressure.
    #[serde(rename = "T2 (C)")]
    pub reference_boiling_point_c: f64,

    /// Pressure P2 in torr at which the boiling point was measured.
    /// Must be finite and > 0.
    #[serde(rename = "P2 (torr)")]
    pub reference_pressure_torr: f64,
}

impl CompoundRecord {
    /// Check the record invariants. `row` is the 1-based data row for error
    /// reporting.
    pub fn validate(&self, row: usize) -> Result<(), DataSourceError> {
        if self.name.trim().is_empty() {
            return Err(DataSourceError::EmptyName { row });
        }

        self.check_field(
            row,
            "Vap Enthalpy (kJ/mol)",
            self.vapor_enthalpy_kj_mol,
            true,
        )?;
        self.check_field(row, "T2 (C)", self.reference_boiling_point_c, false)?;
        self.check_field(row, "P2 (torr)", self.reference_pressure_torr, true)?;
        Ok(())
    }

    fn check_field(
        &self,
        row: usize,
        field: &'static str,
        value: f64,
        must_be_positive: bool,
    ) -> Result<(), DataSourceError> {
        let ok = if must_be_positive {
            value.is_finite() && value > 0.0
        } else {
            value.is_finite()
        };

        if ok {
            Ok(())
        } else {
            Err(DataSourceError::InvalidField {
                row,
                name: self.name.clone(),
                field,
                requirement: if must_be_positive {
                    "finite and > 0"
                } else {
                    "finite"
                },
                value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> CompoundRecord {
        CompoundRecord {
            name: "Water".to_string(),
            vapor_enthalpy_kj_mol: 40.65,
            reference_boiling_point_c: 100.0,
            reference_pressure_torr: 760.0,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(water().validate(1).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut rec = water();
        rec.name = "  ".to_string();
        assert!(matches!(
            rec.validate(3),
            Err(DataSourceError::EmptyName { row: 3 })
        ));
    }

    #[test]
    fn rejects_non_positive_enthalpy() {
        let mut rec = water();
        rec.vapor_enthalpy_kj_mol = 0.0;
        let err = rec.validate(1).unwrap_err();
        assert!(err.to_string().contains("Vap Enthalpy"));
    }

    #[test]
    fn rejects_non_finite_boiling_point() {
        let mut rec = water();
        rec.reference_boiling_point_c = f64::NAN;
        assert!(rec.validate(1).is_err());
    }

    #[test]
    fn rejects_negative_reference_pressure() {
        let mut rec = water();
        rec.reference_pressure_torr = -760.0;
        let err = rec.validate(2).unwrap_err();
        assert!(err.to_string().contains("P2 (torr)"));
    }
}
