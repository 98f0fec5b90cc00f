use std::fmt::Display;

use kettle_domain::{self as domain, CreateError, ReadError, ReplaceError, StorageError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use uuid::Uuid;

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Tracks,
    Exercises,
    Sessions,
    Blocks,
    Assignments,
}

fn corrupted(table: Table, err: impl Display) -> StorageError {
    StorageError::Corrupted(format!("{}: {err}", table.as_ref()))
}

/// Rows of all tables. Every store operation is a function from one consistent state to the
/// next.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Tables {
    pub tracks: Vec<Track>,
    pub exercises: Vec<Exercise>,
    pub sessions: Vec<Session>,
    pub blocks: Vec<Block>,
    pub assignments: Vec<Assignment>,
}

impl Tables {
    pub fn seeded() -> Result<Self, StorageError> {
        Ok(Self {
            tracks: crate::seed_tracks()
                .map_err(|err| corrupted(Table::Tracks, err))?
                .iter()
                .map(Track::from)
                .collect(),
            ..Self::default()
        })
    }

    pub fn read_tracks(&self) -> Result<Vec<domain::Track>, ReadError> {
        self.tracks
            .iter()
            .cloned()
            .map(|t| domain::Track::try_from(t).map_err(|err| corrupted(Table::Tracks, err).into()))
            .collect()
    }

    pub fn read_track(&self, slug: &str) -> Result<domain::Track, ReadError> {
        let track = self
            .tracks
            .iter()
            .find(|t| t.slug == slug)
            .ok_or(ReadError::NotFound)?;
        Ok(domain::Track::try_from(track.clone()).map_err(|err| corrupted(Table::Tracks, err))?)
    }

    pub fn read_exercises(&self) -> Result<Vec<domain::Exercise>, ReadError> {
        self.exercises
            .iter()
            .cloned()
            .map(|e| {
                domain::Exercise::try_from(e).map_err(|err| corrupted(Table::Exercises, err).into())
            })
            .collect()
    }

    /// Case-insensitive substring match. Among several matches an exact name wins, otherwise
    /// the oldest row is returned.
    pub fn find_exercise(&self, name: &str) -> Result<Option<domain::Exercise>, ReadError> {
        let name = name.trim();
        let query = name.to_lowercase();
        let matches = self
            .exercises
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&query))
            .collect::<Vec<_>>();
        let Some(first) = matches.first() else {
            return Ok(None);
        };
        let exercise = match matches.iter().find(|e| e.name.eq_ignore_ascii_case(name)) {
            Some(exact) => exact,
            None => {
                if matches.len() > 1 {
                    warn!(
                        "catalog lookup \"{name}\" matches {} exercises, using \"{}\"",
                        matches.len(),
                        first.name
                    );
                }
                first
            }
        };
        Ok(Some(
            domain::Exercise::try_from(Exercise::clone(exercise))
                .map_err(|err| corrupted(Table::Exercises, err))?,
        ))
    }

    pub fn create_exercise(
        &mut self,
        exercise: domain::NewExercise,
    ) -> Result<domain::Exercise, CreateError> {
        let name = exercise.name.to_string();
        if self
            .exercises
            .iter()
            .any(|e| e.name.eq_ignore_ascii_case(&name))
        {
            return Err(CreateError::Conflict);
        }
        let exercise = domain::Exercise {
            id: Uuid::new_v4().into(),
            name: exercise.name,
            category: exercise.category,
            equipment: exercise.equipment,
            skill_level: exercise.skill_level,
            active: exercise.active,
        };
        self.exercises.push(Exercise::from(&exercise));
        Ok(exercise)
    }

    /// Sessions of one track and week ordered by day, AM before PM.
    pub fn read_sessions(
        &self,
        track_id: domain::TrackID,
        week: domain::Week,
    ) -> Result<Vec<domain::Session>, ReadError> {
        let mut sessions = self
            .sessions
            .iter()
            .filter(|s| s.track_id == *track_id && s.week == *week)
            .collect::<Vec<_>>();
        sessions.sort_by_key(|s| (s.day, s.sub_session.clone()));
        Ok(sessions
            .into_iter()
            .map(|s| self.assemble(s))
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub fn read_session(&self, key: domain::SessionKey) -> Result<domain::Session, ReadError> {
        let session = self
            .sessions
            .iter()
            .find(|s| s.has_key(&key))
            .ok_or(ReadError::NotFound)?;
        Ok(self.assemble(session)?)
    }

    /// Deletes the session stored under the key of `session` and inserts `session`.
    ///
    /// Nothing is changed when an assignment references an exercise missing from the catalog.
    pub fn replace_session(
        &mut self,
        session: domain::NewSession,
    ) -> Result<domain::Session, ReplaceError> {
        for block in &session.blocks {
            for exercise in &block.exercises {
                if !self.exercises.iter().any(|e| e.id == *exercise.exercise_id) {
                    return Err(ReplaceError::Other(
                        format!("unknown exercise {}", *exercise.exercise_id).into(),
                    ));
                }
            }
        }

        if self.delete_session(&session.key) {
            debug!("deleted previous session \"{}\"", session.name);
        }

        let session_id = Uuid::new_v4();
        let blocks = session
            .blocks
            .into_iter()
            .map(|block| domain::SessionBlock {
                id: Uuid::new_v4().into(),
                block_type: block.block_type,
                name: block.name,
                sequence: block.sequence,
                duration_minutes: block.duration_minutes,
                exercises: block.exercises,
            })
            .collect::<Vec<_>>();
        let session = domain::Session {
            id: session_id.into(),
            key: session.key,
            name: session.name,
            focus: session.focus,
            session_type: session.session_type,
            duration_minutes: session.duration_minutes,
            intensity: session.intensity,
            published: session.published,
            blocks,
        };

        self.sessions.push(Session::from(&session));
        for block in &session.blocks {
            self.blocks.push(Block::new(session_id, block));
            for exercise in &block.exercises {
                self.assignments.push(Assignment::new(*block.id, exercise));
            }
        }

        Ok(session)
    }

    /// Removes a session together with its blocks and assignment rows.
    fn delete_session(&mut self, key: &domain::SessionKey) -> bool {
        let Some(position) = self.sessions.iter().position(|s| s.has_key(key)) else {
            return false;
        };
        let session = self.sessions.remove(position);
        let block_ids = self
            .blocks
            .iter()
            .filter(|b| b.session_id == session.id)
            .map(|b| b.id)
            .collect::<Vec<_>>();
        self.assignments.retain(|a| !block_ids.contains(&a.block_id));
        self.blocks.retain(|b| b.session_id != session.id);
        true
    }

    fn assemble(&self, session: &Session) -> Result<domain::Session, StorageError> {
        let mut blocks = self
            .blocks
            .iter()
            .filter(|b| b.session_id == session.id)
            .collect::<Vec<_>>();
        blocks.sort_by_key(|b| b.sequence);

        let blocks = blocks
            .into_iter()
            .map(|block| {
                let mut assignments = self
                    .assignments
                    .iter()
                    .filter(|a| a.block_id == block.id)
                    .collect::<Vec<_>>();
                assignments.sort_by_key(|a| a.sequence);
                let exercises = assignments
                    .into_iter()
                    .map(|a| {
                        domain::SessionExercise::try_from(a.clone())
                            .map_err(|err| corrupted(Table::Assignments, err))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                block
                    .to_domain(exercises)
                    .map_err(|err| corrupted(Table::Blocks, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        session
            .to_domain(blocks)
            .map_err(|err| corrupted(Table::Sessions, err))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidValue(#[from] strum::ParseError),
    #[error(transparent)]
    InvalidWeek(#[from] domain::WeekError),
    #[error(transparent)]
    InvalidIntensity(#[from] domain::IntensityError),
    #[error(transparent)]
    InvalidLoad(#[from] domain::LoadError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
}

impl From<&domain::Track> for Track {
    fn from(value: &domain::Track) -> Self {
        Self {
            id: *value.id,
            slug: value.slug.clone(),
            name: value.name.to_string(),
            description: value.description.clone(),
        }
    }
}

impl TryFrom<Track> for domain::Track {
    type Error = domain::NameError;

    fn try_from(value: Track) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            slug: value.slug,
            name: domain::Name::new(&value.name)?,
            description: value.description,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub equipment: Vec<String>,
    pub skill_level: String,
    pub active: bool,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            category: value.category.to_string(),
            equipment: value.equipment.clone(),
            skill_level: value.skill_level.to_string(),
            active: value.active,
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = RecordError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: value.category.parse()?,
            equipment: value.equipment,
            skill_level: value.skill_level.parse()?,
            active: value.active,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub track_id: Uuid,
    pub week: u32,
    pub day: u8,
    pub sub_session: Option<String>,
    pub name: String,
    pub focus: String,
    pub session_type: String,
    pub duration_minutes: u32,
    pub intensity: u8,
    pub published: bool,
}

impl Session {
    fn has_key(&self, key: &domain::SessionKey) -> bool {
        self.track_id == *key.track_id
            && self.week == *key.week
            && self.day == key.day
            && self.sub_session == key.sub_session.map(|label| label.to_string())
    }

    fn to_domain(&self, blocks: Vec<domain::SessionBlock>) -> Result<domain::Session, RecordError> {
        Ok(domain::Session {
            id: self.id.into(),
            key: domain::SessionKey {
                track_id: self.track_id.into(),
                week: domain::Week::new(self.week)?,
                day: self.day,
                sub_session: self
                    .sub_session
                    .as_deref()
                    .map(str::parse)
                    .transpose()?,
            },
            name: domain::Name::new(&self.name)?,
            focus: self.focus.parse()?,
            session_type: self.session_type.parse()?,
            duration_minutes: self.duration_minutes,
            intensity: domain::Intensity::new(self.intensity)?,
            published: self.published,
            blocks,
        })
    }
}

impl From<&domain::Session> for Session {
    fn from(value: &domain::Session) -> Self {
        Self {
            id: *value.id,
            track_id: *value.key.track_id,
            week: *value.key.week,
            day: value.key.day,
            sub_session: value.key.sub_session.map(|label| label.to_string()),
            name: value.name.to_string(),
            focus: value.focus.as_ref().to_string(),
            session_type: value.session_type.to_string(),
            duration_minutes: value.duration_minutes,
            intensity: *value.intensity,
            published: value.published,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: Uuid,
    pub session_id: Uuid,
    pub block_type: String,
    pub name: String,
    pub sequence: u32,
    pub duration_minutes: u32,
}

impl Block {
    fn new(session_id: Uuid, block: &domain::SessionBlock) -> Self {
        Self {
            id: *block.id,
            session_id,
            block_type: block.block_type.to_string(),
            name: block.name.to_string(),
            sequence: block.sequence,
            duration_minutes: block.duration_minutes,
        }
    }

    fn to_domain(
        &self,
        exercises: Vec<domain::SessionExercise>,
    ) -> Result<domain::SessionBlock, RecordError> {
        Ok(domain::SessionBlock {
            id: self.id.into(),
            block_type: self.block_type.parse()?,
            name: domain::Name::new(&self.name)?,
            sequence: self.sequence,
            duration_minutes: self.duration_minutes,
            exercises,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Assignment {
    pub block_id: Uuid,
    pub exercise_id: Uuid,
    pub sequence: u32,
    pub sets: Option<u32>,
    pub reps: Option<String>,
    pub duration_seconds: Option<u32>,
    pub load_type: String,
    pub load_value: Option<f32>,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
    pub scaling_notes: Option<String>,
}

impl Assignment {
    fn new(block_id: Uuid, value: &domain::SessionExercise) -> Self {
        Self {
            block_id,
            exercise_id: *value.exercise_id,
            sequence: value.sequence,
            sets: value.sets,
            reps: value.reps.as_ref().map(ToString::to_string),
            duration_seconds: value.duration_seconds,
            load_type: value.load.load_type().to_string(),
            load_value: value.load.value(),
            rest_seconds: value.rest_seconds,
            notes: value.notes.clone(),
            scaling_notes: value.scaling_notes.clone(),
        }
    }
}

impl TryFrom<Assignment> for domain::SessionExercise {
    type Error = RecordError;

    fn try_from(value: Assignment) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            sequence: value.sequence,
            sets: value.sets,
            reps: value.reps.as_deref().map(domain::Reps::parse),
            duration_seconds: value.duration_seconds,
            load: domain::Load::from_parts(value.load_type.parse()?, value.load_value)?,
            rest_seconds: value.rest_seconds,
            notes: value.notes,
            scaling_notes: value.scaling_notes,
        })
    }
}
