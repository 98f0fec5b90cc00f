use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use kettle_domain::StorageError;
use log::debug;
use tempfile::NamedTempFile;

use crate::tables::Tables;

/// Store persisting all tables as one JSON document.
///
/// Each change is written to a uniquely named temporary file next to the document, which then
/// replaces the document by a rename. A change is either stored completely or not at all.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the document at `path`, creating it with the canonical tracks if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };
        if store.path.exists() {
            store.load()?;
        } else {
            debug!("creating {}", store.path.display());
            store.save(&Tables::seeded()?)?;
        }
        Ok(store)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Tables, StorageError> {
        let content = fs::read_to_string(&self.path).map_err(io_error)?;
        serde_json::from_str(&content).map_err(|err| {
            StorageError::Corrupted(format!("{}: {err}", self.path.display()))
        })
    }

    fn save(&self, tables: &Tables) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(tables).map_err(|err| StorageError::Other(err.into()))?;
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temporary = NamedTempFile::new_in(directory).map_err(io_error)?;
        temporary.write_all(content.as_bytes()).map_err(io_error)?;
        temporary.as_file().sync_all().map_err(io_error)?;
        temporary
            .persist(&self.path)
            .map(|_| ())
            .map_err(|err| io_error(err.error))
    }

    pub(crate) fn read<T, E>(&self, f: impl FnOnce(&Tables) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        f(&self.load()?)
    }

    pub(crate) fn update<T, E>(&self, f: impl FnOnce(&mut Tables) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let mut tables = self.load()?;
        let result = f(&mut tables)?;
        self.save(&tables)?;
        Ok(result)
    }
}

fn io_error(err: std::io::Error) -> StorageError {
    StorageError::Other(err.into())
}

fn poisoned() -> StorageError {
    StorageError::Other("JSON file store lock poisoned".into())
}

crate::impl_repositories!(JsonFileStore);
