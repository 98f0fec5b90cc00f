use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    pub level: Level,
    pub message: String,
}

/// Most recent entries, newest first.
#[derive(Default)]
pub struct MemoryLog {
    entries: Mutex<VecDeque<Entry>>,
}

impl Repository for MemoryLog {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(MAX_ENTRIES);
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<dyn Repository>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };
        eprintln!("{}", format_entry(&entry));

        if let Ok(log) = LOG.lock() {
            if let Some(ref repository) = *log {
                let _ = repository.write_entry(entry);
            }
        }
    }

    fn flush(&self) {}
}

pub fn format_entry(entry: &Entry) -> String {
    format!("{} {:<5} {}", entry.time, entry.level, entry.message)
}

/// Number of warnings and errors among the entries.
pub fn count_problems(entries: &VecDeque<Entry>) -> (usize, usize) {
    entries.iter().fold((0, 0), |(warnings, errors), entry| match entry.level {
        Level::Warn => (warnings + 1, errors),
        Level::Error => (warnings, errors + 1),
        _ => (warnings, errors),
    })
}
