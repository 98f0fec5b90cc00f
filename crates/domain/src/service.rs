use log::{debug, error};

use crate::{
    Exercise, ExerciseRepository, ExerciseService, GenerateError, GenerationRequest,
    GenerationResult, GenerationService, GeneratorSession, PlannedSession, ReadError,
    ScheduleService, Session, SessionRepository, StorageError, Track, TrackRepository,
    TrackService, Week, generator,
};

pub struct Service<R> {
    repository: R,
    seed: Option<u64>,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            seed: None,
        }
    }

    /// Every generation run starts its random source from this seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> GenerationService for Service<R>
where
    R: TrackRepository + ExerciseRepository + SessionRepository,
{
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerateError> {
        let result = generator::generate(
            &self.repository,
            request,
            &mut GeneratorSession::new(self.seed),
        );
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                GenerateError::Storage {
                    source: StorageError::NoConnection,
                    ..
                } => {
                    debug!("failed to generate sessions: {err}");
                }
                _ => {
                    error!("failed to generate sessions: {err}");
                }
            },
        }
        result
    }

    fn preview(&self, track: &str, week: Week) -> Result<Vec<PlannedSession>, GenerateError> {
        let result = generator::plan(track, week, &mut GeneratorSession::new(self.seed));
        if let Err(ref err) = result {
            error!("failed to preview sessions: {err}");
        }
        result
    }
}

impl<R: TrackRepository> TrackService for Service<R> {
    fn get_tracks(&self) -> Result<Vec<Track>, ReadError> {
        log_on_error!(self.repository.read_tracks(), ReadError, "get", "tracks")
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }
}

impl<R> ScheduleService for Service<R>
where
    R: TrackRepository + SessionRepository,
{
    fn get_week(&self, track: &str, week: Week) -> Result<Vec<Session>, ReadError> {
        log_on_error!(
            self.repository
                .read_track(track.trim())
                .and_then(|track| self.repository.read_sessions(track.id, week)),
            ReadError,
            "get",
            "sessions"
        )
    }

    fn get_day(&self, track: &str, week: Week, day: u8) -> Result<Vec<Session>, ReadError> {
        Ok(self
            .get_week(track, week)?
            .into_iter()
            .filter(|session| session.key.day == day)
            .collect())
    }
}
