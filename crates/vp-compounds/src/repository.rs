//! Name-indexed access to the compound table.
//!
//! The table is read once, validated row by row, and then served as an
//! immutable in-memory index. Lookups are exact and case-sensitive.

use crate::error::{DataSourceError, NotFoundError};
use crate::record::CompoundRecord;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Columns the source table must carry. Fixed external contract.
pub const REQUIRED_COLUMNS: [&str; 4] =
    ["Item", "Vap Enthalpy (kJ/mol)", "T2 (C)", "P2 (torr)"];

/// Read-only, name-indexed compound table.
///
/// Construction is the load: once built, no record is ever mutated. Hosts
/// that need lazy shared loading wrap this in [`crate::SharedRepository`].
#[derive(Debug, Clone)]
pub struct CompoundRepository {
    records: Vec<CompoundRecord>,
    index: HashMap<String, usize>,
}

impl CompoundRepository {
    /// Load and validate every row of the CSV table at `path`.
    ///
    /// Fails on an unreadable file, malformed CSV, a missing required
    /// column, an invariant-violating field, or a duplicate `Item` name.
    pub fn load(path: &Path) -> Result<Self, DataSourceError> {
        let file = File::open(path).map_err(|source| DataSourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader
            .headers()
            .map_err(|source| DataSourceError::Csv {
                path: path.display().to_string(),
                source,
            })?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataSourceError::MissingColumn {
                    path: path.display().to_string(),
                    column,
                });
            }
        }

        let mut records: Vec<CompoundRecord> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, result) in reader.deserialize::<CompoundRecord>().enumerate() {
            // 1-based data row, not counting the header
            let row = i + 1;
            let record = result.map_err(|source| DataSourceError::Csv {
                path: path.display().to_string(),
                source,
            })?;
            record.validate(row)?;

            if let Some(&first) = index.get(&record.name) {
                return Err(DataSourceError::DuplicateName {
                    name: record.name,
                    first_row: first + 1,
                    row,
                });
            }
            index.insert(record.name.clone(), records.len());
            records.push(record);
        }

        tracing::debug!(
            path = %path.display(),
            compounds = records.len(),
            "loaded compound table"
        );

        Ok(Self { records, index })
    }

    /// All compound names, in source row order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Exact, case-sensitive lookup. Empty names never match.
    pub fn lookup(&self, name: &str) -> Result<&CompoundRecord, NotFoundError> {
        if name.is_empty() {
            return Err(NotFoundError {
                name: name.to_string(),
            });
        }
        self.index
            .get(name)
            .map(|&i| &self.records[i])
            .ok_or_else(|| NotFoundError {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompoundRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const GOOD_TABLE: &str = "\
Item,Vap Enthalpy (kJ/mol),T2 (C),P2 (torr)
Water,40.65,100.0,760.0
Ethanol,38.56,78.37,760.0
Acetone,29.1,56.05,760.0
";

    fn write_table(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_and_preserves_source_order() {
        let file = write_table(GOOD_TABLE);
        let repo = CompoundRepository::load(file.path()).unwrap();

        assert_eq!(repo.len(), 3);
        assert_eq!(repo.names(), vec!["Water", "Ethanol", "Acetone"]);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let file = write_table(GOOD_TABLE);
        let repo = CompoundRepository::load(file.path()).unwrap();

        let water = repo.lookup("Water").unwrap();
        assert_eq!(water.vapor_enthalpy_kj_mol, 40.65);
        assert_eq!(water.reference_boiling_point_c, 100.0);
        assert_eq!(water.reference_pressure_torr, 760.0);

        let err = repo.lookup("water").unwrap_err();
        assert_eq!(err.name, "water");
        assert!(repo.lookup("").is_err());
    }

    #[test]
    fn rejects_missing_column() {
        let file = write_table(
            "Item,Vap Enthalpy (kJ/mol),T2 (C)\nWater,40.65,100.0\n",
        );
        let err = CompoundRepository::load(file.path()).unwrap_err();
        match err {
            DataSourceError::MissingColumn { column, .. } => {
                assert_eq!(column, "P2 (torr)");
            }
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_names() {
        let file = write_table(
            "Item,Vap Enthalpy (kJ/mol),T2 (C),P2 (torr)\n\
             Water,40.65,100.0,760.0\n\
             Water,40.65,100.0,760.0\n",
        );
        let err = CompoundRepository::load(file.path()).unwrap_err();
        match err {
            DataSourceError::DuplicateName {
                name,
                first_row,
                row,
            } => {
                assert_eq!(name, "Water");
                assert_eq!(first_row, 1);
                assert_eq!(row, 2);
            }
            other => panic!("expected DuplicateName, got {other}"),
        }
    }

    #[test]
    fn rejects_invariant_violating_field() {
        let file = write_table(
            "Item,Vap Enthalpy (kJ/mol),T2 (C),P2 (torr)\nWater,-40.65,100.0,760.0\n",
        );
        let err = CompoundRepository::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Vap Enthalpy"));
        assert!(err.to_string().contains("Water"));
    }

    #[test]
    fn rejects_unreadable_path() {
        let err =
            CompoundRepository::load(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataSourceError::Io { .. }));
    }

    #[test]
    fn tolerates_extra_columns() {
        let file = write_table(
            "Item,Vap Enthalpy (kJ/mol),T2 (C),P2 (torr),Notes\n\
             Water,40.65,100.0,760.0,standard\n",
        );
        let repo = CompoundRepository::load(file.path()).unwrap();
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn empty_table_loads_with_no_names() {
        let file = write_table("Item,Vap Enthalpy (kJ/mol),T2 (C),P2 (torr)\n");
        let repo = CompoundRepository::load(file.path()).unwrap();
        assert!(repo.is_empty());
        assert!(repo.names().is_empty());
        assert!(repo.lookup("Water").is_err());
    }
}
