use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::LevelFilter;

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, Error>;
    fn write_settings(&self, settings: &Settings) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("{0} already exists")]
    AlreadyExists(PathBuf),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub data_file: PathBuf,
    pub log_level: String,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn level_filter(&self) -> Result<LevelFilter, Error> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| Error::InvalidLogLevel(self.log_level.clone()))
    }

    /// Command line values take precedence over the configuration file.
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        log_level: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("kettle.json"),
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

pub struct TomlFile {
    path: PathBuf,
}

impl TomlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsRepository for TomlFile {
    fn read_settings(&self) -> Result<Settings, Error> {
        match fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str(&content).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), Error> {
        if self.path.exists() {
            return Err(Error::AlreadyExists(self.path.clone()));
        }
        let content = toml::to_string(settings)?;
        fs::write(&self.path, content).map_err(|err| self.io_error(err))
    }
}
