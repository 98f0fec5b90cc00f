use std::fmt;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl From<ReadError> for CreateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound => CreateError::Other("not found".into()),
            ReadError::Storage(storage) => CreateError::Storage(storage),
            ReadError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReplaceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl From<CreateError> for ReplaceError {
    fn from(value: CreateError) -> Self {
        match value {
            CreateError::Conflict => ReplaceError::Other("conflict".into()),
            CreateError::Storage(storage) => ReplaceError::Storage(storage),
            CreateError::Other(other) => ReplaceError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("corrupted data: {0}")]
    Corrupted(String),
    #[error(transparent)]
    Other(#[from] BoxError),
}

/// Step of a generation run that touched the data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadTrack,
    ReplaceSession,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Stage::ReadTrack => "read track",
                Stage::ReplaceSession => "replace session",
            }
        )
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("unknown track kind: {0}")]
    UnknownTrackKind(String),
    #[error("track not found: {0}")]
    TrackNotFound(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid name: {0}")]
    InvalidName(#[from] crate::NameError),
    #[error("failed to {stage} for track {track}: {source}")]
    Storage {
        track: String,
        stage: Stage,
        source: StorageError,
    },
    #[error("block {block} of track {track} week {week} day {day} has no exercises")]
    IncompleteBlock {
        track: String,
        week: u32,
        day: u8,
        block: String,
    },
}

impl GenerateError {
    pub(crate) fn storage(track: &str, stage: Stage, source: StorageError) -> Self {
        GenerateError::Storage {
            track: track.to_string(),
            stage,
            source,
        }
    }
}

impl From<ReadError> for StorageError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound => StorageError::Corrupted("missing row".to_string()),
            ReadError::Storage(storage) => storage,
            ReadError::Other(other) => StorageError::Other(other),
        }
    }
}

impl From<ReplaceError> for StorageError {
    fn from(value: ReplaceError) -> Self {
        match value {
            ReplaceError::Storage(storage) => storage,
            ReplaceError::Other(other) => StorageError::Other(other),
        }
    }
}
