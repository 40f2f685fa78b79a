//! At-most-once lazy loading for multi-threaded hosts.

use crate::error::DataSourceError;
use crate::repository::CompoundRepository;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

/// Lazily-loaded, shared wrapper around [`CompoundRepository`].
///
/// Hosts that may call `get` from several threads are guaranteed a single
/// read of the source file and a fully-populated index; no caller ever
/// observes a partially-loaded table. A failed load leaves the cell empty,
/// so a later call may try again with a corrected source.
#[derive(Debug)]
pub struct SharedRepository {
    path: PathBuf,
    cell: OnceLock<CompoundRepository>,
    load_lock: Mutex<()>,
}

impl SharedRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded repository, reading the source on first use.
    pub fn get(&self) -> Result<&CompoundRepository, DataSourceError> {
        if let Some(repo) = self.cell.get() {
            return Ok(repo);
        }

        // Serialize loaders so the file is read at most once; losers of the
        // race see the populated cell on the re-check.
        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(repo) = self.cell.get() {
            return Ok(repo);
        }

        let repo = CompoundRepository::load(&self.path)?;
        Ok(self.cell.get_or_init(|| repo))
    }
}
