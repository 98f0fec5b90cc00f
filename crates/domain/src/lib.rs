#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod generator;
mod load;
pub mod movement;
mod name;
mod planner;
mod rep_scheme;
mod service;
mod session;
mod template;
mod track;
mod writer;

pub use error::{
    BoxError, CreateError, GenerateError, ReadError, ReplaceError, Stage,
    StorageError,
};
pub use exercise::{
    Category, Exercise, ExerciseID, ExerciseRepository, ExerciseService, NewExercise, SkillLevel,
};
pub use generator::{
    GenerationRequest, GenerationResult, GenerationService, GeneratorSession, PlannedSession,
    SessionSummary, generate, plan,
};
pub use load::{Load, LoadError, LoadType, MAX_PERCENT, Progression, base_percent};
pub use movement::StrengthPool;
pub use name::{Name, NameError};
pub use planner::{Block, BlockType, ExerciseAssignment, WARM_UP_MINUTES, plan_day};
pub use rep_scheme::{Reps, TrainingGoal};
pub use service::Service;
pub use session::{
    BlockID, NewBlock, NewSession, ScheduleService, Session, SessionBlock, SessionExercise,
    SessionID, SessionKey, SessionRepository, session_name,
};
pub use template::{
    DayTemplate, Focus, Intensity, IntensityError, SessionType, SubSession, Week, WeekError,
    WeekPlan, resolve,
};
pub use track::{Track, TrackID, TrackKind, TrackRepository, TrackService};
pub use writer::write_session;
