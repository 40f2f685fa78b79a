//! Compound table errors.

use thiserror::Error;

/// Errors raised while reading and validating the compound table.
///
/// All of these are fatal for the load: the repository never substitutes
/// defaults for missing or malformed reference data.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Cannot read compound table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed compound table '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Compound table '{path}' is missing required column '{column}'")]
    MissingColumn {
        path: String,
        column: &'static str,
    },

    #[error("Row {row}: compound name is empty")]
    EmptyName { row: usize },

    #[error("Row {row} ('{name}'): {field} must be {requirement}, got {value}")]
    InvalidField {
        row: usize,
        name: String,
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("Duplicate compound name '{name}' (rows {first_row} and {row})")]
    DuplicateName {
        name: String,
        first_row: usize,
        row: usize,
    },
}

/// A lookup asked for a compound the table does not contain.
///
/// Matching is exact and case-sensitive; callers should re-prompt selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No compound named '{name}' in the loaded table")]
pub struct NotFoundError {
    pub name: String,
}
