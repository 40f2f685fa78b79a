//! Compound table loading and introspection.

use std::path::Path;
use vp_compounds::CompoundRepository;

use crate::error::AppResult;

/// Summary of one compound for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundSummary {
    pub name: String,
    pub vapor_enthalpy_kj_mol: f64,
    pub reference_boiling_point_c: f64,
    pub reference_pressure_torr: f64,
}

/// Load the compound table from a CSV file.
pub fn load_repository(path: &Path) -> AppResult<CompoundRepository> {
    let repo = CompoundRepository::load(path)?;
    tracing::debug!(compounds = repo.len(), "repository ready");
    Ok(repo)
}

/// All compound names, in source order; used to populate selection.
pub fn list_compounds(repo: &CompoundRepository) -> Vec<String> {
    repo.names().into_iter().map(str::to_string).collect()
}

/// The reference triple for one compound, by exact name.
pub fn get_compound(repo: &CompoundRepository, name: &str) -> AppResult<CompoundSummary> {
    let record = repo.lookup(name)?;
    Ok(CompoundSummary {
        name: record.name.clone(),
        vapor_enthalpy_kj_mol: record.vapor_enthalpy_kj_mol,
        reference_boiling_point_c: record.reference_boiling_point_c,
        reference_pressure_torr: record.reference_pressure_torr,
    })
}
