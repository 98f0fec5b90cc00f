use std::sync::{Mutex, MutexGuard};

use kettle_domain::StorageError;

use crate::tables::Tables;

/// Store keeping all tables in memory. Contents are lost when the store is dropped.
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates a store containing the canonical tracks.
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self::with_tables(Tables::seeded()?))
    }

    #[must_use]
    pub fn with_tables(tables: Tables) -> Self {
        Self {
            tables: Mutex::new(tables),
        }
    }

    #[must_use]
    pub fn tables(&self) -> Tables {
        self.lock().map(|tables| tables.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StorageError> {
        self.tables
            .lock()
            .map_err(|_| StorageError::Other("memory store lock poisoned".into()))
    }

    pub(crate) fn read<T, E>(&self, f: impl FnOnce(&Tables) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        f(&*self.lock()?)
    }

    /// Applies `f` to a copy of the tables, which replaces the current tables only if `f`
    /// succeeds.
    pub(crate) fn update<T, E>(&self, f: impl FnOnce(&mut Tables) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        let mut tables = self.lock()?;
        let mut copy = tables.clone();
        let result = f(&mut copy)?;
        *tables = copy;
        Ok(result)
    }
}

crate::impl_repositories!(MemoryStore);
