use derive_more::Deref;
use uuid::Uuid;

use crate::{
    BlockType, ExerciseID, Focus, Intensity, Load, Name, ReadError, ReplaceError, Reps,
    SessionType, SubSession, TrackID, Week,
};

/// Read-side queries over generated sessions.
pub trait ScheduleService {
    fn get_week(&self, track: &str, week: Week) -> Result<Vec<Session>, ReadError>;
    fn get_day(&self, track: &str, week: Week, day: u8) -> Result<Vec<Session>, ReadError>;
}

pub trait SessionRepository {
    /// All sessions of one track and week, ordered by day and sub-session.
    fn read_sessions(&self, track_id: TrackID, week: Week) -> Result<Vec<Session>, ReadError>;
    fn read_session(&self, key: SessionKey) -> Result<Session, ReadError>;
    /// Removes the session stored under the same key, together with its blocks and exercise
    /// assignments, and inserts the new session. Both steps happen in one unit of work.
    fn replace_session(&self, session: NewSession) -> Result<Session, ReplaceError>;
}

/// Coordinates under which at most one session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey {
    pub track_id: TrackID,
    pub week: Week,
    pub day: u8,
    pub sub_session: Option<SubSession>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionID,
    pub key: SessionKey,
    pub name: Name,
    pub focus: Focus,
    pub session_type: SessionType,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub published: bool,
    pub blocks: Vec<SessionBlock>,
}

impl Session {
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.blocks.iter().map(|b| b.exercises.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionBlock {
    pub id: BlockID,
    pub block_type: BlockType,
    pub name: Name,
    pub sequence: u32,
    pub duration_minutes: u32,
    pub exercises: Vec<SessionExercise>,
}

/// Assignment row linking a block to a catalog exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionExercise {
    pub exercise_id: ExerciseID,
    pub sequence: u32,
    pub sets: Option<u32>,
    pub reps: Option<Reps>,
    pub duration_seconds: Option<u32>,
    pub load: Load,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
    pub scaling_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub key: SessionKey,
    pub name: Name,
    pub focus: Focus,
    pub session_type: SessionType,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub published: bool,
    pub blocks: Vec<NewBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBlock {
    pub block_type: BlockType,
    pub name: Name,
    pub sequence: u32,
    pub duration_minutes: u32,
    pub exercises: Vec<SessionExercise>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionID(Uuid);

impl SessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BlockID(Uuid);

impl From<Uuid> for BlockID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for BlockID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Name of a generated session, e.g. "Week 2 Day 1: Max Strength (AM)".
#[must_use]
pub fn session_name(week: Week, day: u8, focus: Focus, sub_session: Option<SubSession>) -> String {
    let name = format!("Week {week} Day {day}: {}", focus.title());
    match sub_session {
        Some(label) => format!("{name} ({label})"),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 1, Focus::UpperStrength, None, "Week 1 Day 1: Upper Strength")]
    #[case(2, 1, Focus::MaxStrength, Some(SubSession::Am), "Week 2 Day 1: Max Strength (AM)")]
    #[case(12, 3, Focus::Zone2, Some(SubSession::Pm), "Week 12 Day 3: Zone 2 (PM)")]
    fn test_session_name(
        #[case] week: u32,
        #[case] day: u8,
        #[case] focus: Focus,
        #[case] sub_session: Option<SubSession>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            session_name(Week::new(week).unwrap(), day, focus, sub_session),
            expected
        );
    }

    #[test]
    fn test_session_key_distinguishes_sub_sessions() {
        let key = SessionKey {
            track_id: 1.into(),
            week: Week::new(1).unwrap(),
            day: 1,
            sub_session: Some(SubSession::Am),
        };
        assert_ne!(
            key,
            SessionKey {
                sub_session: Some(SubSession::Pm),
                ..key
            }
        );
        assert!(
            key < SessionKey {
                sub_session: Some(SubSession::Pm),
                ..key
            }
        );
    }

    #[test]
    fn test_session_id_nil() {
        assert!(SessionID::nil().is_nil());
        assert!(!SessionID::from(1).is_nil());
    }
}
