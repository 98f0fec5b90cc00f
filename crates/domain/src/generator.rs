use std::collections::HashSet;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    Block, ExerciseRepository, GenerateError, ReadError, Session, SessionRepository, Stage,
    TrackKind, TrackRepository, Week, planner, session_name, template, writer,
};

pub trait GenerationService {
    fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerateError>;
    fn preview(&self, track: &str, week: Week) -> Result<Vec<PlannedSession>, GenerateError>;
}

/// State scoped to one generation run. Must not be shared between concurrent runs.
pub struct GeneratorSession {
    used_exercises: HashSet<String>,
    rng: StdRng,
}

impl GeneratorSession {
    /// Rep-scheme choices are reproducible when a seed is given.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            used_exercises: HashSet::new(),
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    #[must_use]
    pub fn used_exercises(&self) -> &HashSet<String> {
        &self.used_exercises
    }

    pub(crate) fn used_exercises_mut(&mut self) -> &mut HashSet<String> {
        &mut self.used_exercises
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub track: String,
    pub start_week: u32,
    pub week_count: u32,
}

impl GenerationRequest {
    fn weeks(&self) -> Result<impl Iterator<Item = Week>, GenerateError> {
        let start = Week::new(self.start_week)
            .map_err(|err| GenerateError::InvalidRequest(format!("start week: {err}")))?;
        if self.week_count == 0 {
            return Err(GenerateError::InvalidRequest(
                "week count must be 1 or greater".to_string(),
            ));
        }
        let last = (*start).checked_add(self.week_count - 1).ok_or_else(|| {
            GenerateError::InvalidRequest(format!(
                "{} weeks starting at week {start} exceed the largest week number",
                self.week_count
            ))
        })?;
        Ok((*start..=last).filter_map(|value| Week::new(value).ok()))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub track_name: String,
    pub weeks_generated: u32,
    pub workouts_created: u32,
    pub sessions: Vec<SessionSummary>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub name: String,
    pub week: u32,
    pub day: u8,
    pub sub_session: Option<String>,
    pub focus: String,
    pub blocks_created: usize,
}

impl From<&Session> for SessionSummary {
    fn from(session: &Session) -> Self {
        Self {
            session_id: *session.id,
            name: session.name.to_string(),
            week: *session.key.week,
            day: session.key.day,
            sub_session: session.key.sub_session.map(|label| label.to_string()),
            focus: session.focus.as_ref().to_string(),
            blocks_created: session.blocks.len(),
        }
    }
}

/// Generates and stores the sessions of `week_count` consecutive weeks.
///
/// Weeks and days are processed in order. A failing session replacement aborts the run; sessions
/// written before the failure remain stored.
pub fn generate<R>(
    repository: &R,
    request: &GenerationRequest,
    session: &mut GeneratorSession,
) -> Result<GenerationResult, GenerateError>
where
    R: TrackRepository + ExerciseRepository + SessionRepository,
{
    let kind = TrackKind::from_slug(&request.track)?;
    let weeks = request.weeks()?;
    let track = repository.read_track(kind.slug()).map_err(|err| match err {
        ReadError::NotFound => GenerateError::TrackNotFound(kind.slug().to_string()),
        err => GenerateError::storage(kind.slug(), Stage::ReadTrack, err.into()),
    })?;

    let mut result = GenerationResult {
        track_name: track.name.to_string(),
        weeks_generated: 0,
        workouts_created: 0,
        sessions: vec![],
    };

    for week in weeks {
        for day in kind.week_plan(week).days {
            let blocks = planner::plan_day(&day, week, session);
            let stored = writer::write_session(repository, &track, week, &day, blocks)?;
            debug!(
                "stored session \"{}\" with {} blocks",
                stored.name,
                stored.blocks.len()
            );
            result.sessions.push(SessionSummary::from(&stored));
        }
        result.weeks_generated += 1;
        if result.weeks_generated % 2 == 0 {
            session.used_exercises.clear();
        }
    }

    result.workouts_created = u32::try_from(result.sessions.len()).unwrap_or(u32::MAX);

    info!(
        "generated {} sessions over {} weeks for track {}",
        result.workouts_created, result.weeks_generated, track.slug
    );

    Ok(result)
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlannedSession {
    pub name: String,
    pub week: u32,
    pub day: u8,
    pub sub_session: Option<String>,
    pub focus: String,
    pub session_type: String,
    pub intensity: u8,
    pub duration_minutes: u32,
    pub blocks: Vec<Block>,
}

/// Plans one week of a track without touching any storage.
pub fn plan(
    slug: &str,
    week: Week,
    session: &mut GeneratorSession,
) -> Result<Vec<PlannedSession>, GenerateError> {
    Ok(template::resolve(slug, week)?
        .days
        .iter()
        .map(|day| PlannedSession {
            name: session_name(week, day.day, day.focus, day.sub_session),
            week: *week,
            day: day.day,
            sub_session: day.sub_session.map(|label| label.to_string()),
            focus: day.focus.as_ref().to_string(),
            session_type: day.session_type.to_string(),
            intensity: *day.intensity,
            duration_minutes: day.duration_minutes,
            blocks: planner::plan_day(day, week, session),
        })
        .collect())
}
