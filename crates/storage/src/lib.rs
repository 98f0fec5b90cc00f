#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use kettle_domain as domain;
use strum::IntoEnumIterator;
use uuid::Uuid;

/// One track row per track kind.
pub fn seed_tracks() -> Result<Vec<domain::Track>, domain::NameError> {
    domain::TrackKind::iter()
        .map(|kind| {
            Ok(domain::Track {
                id: Uuid::new_v4().into(),
                slug: kind.slug().to_string(),
                name: domain::Name::new(kind.display_name())?,
                description: kind.description().to_string(),
            })
        })
        .collect()
}

/// Implements the domain repositories for a store providing `read` and `update` over
/// [`tables::Tables`].
macro_rules! impl_repositories {
    ($store: ty) => {
        impl kettle_domain::TrackRepository for $store {
            fn read_tracks(
                &self,
            ) -> Result<Vec<kettle_domain::Track>, kettle_domain::ReadError> {
                self.read(|tables| tables.read_tracks())
            }

            fn read_track(
                &self,
                slug: &str,
            ) -> Result<kettle_domain::Track, kettle_domain::ReadError> {
                self.read(|tables| tables.read_track(slug))
            }
        }

        impl kettle_domain::ExerciseRepository for $store {
            fn read_exercises(
                &self,
            ) -> Result<Vec<kettle_domain::Exercise>, kettle_domain::ReadError> {
                self.read(|tables| tables.read_exercises())
            }

            fn find_exercise(
                &self,
                name: &str,
            ) -> Result<Option<kettle_domain::Exercise>, kettle_domain::ReadError> {
                self.read(|tables| tables.find_exercise(name))
            }

            fn create_exercise(
                &self,
                exercise: kettle_domain::NewExercise,
            ) -> Result<kettle_domain::Exercise, kettle_domain::CreateError> {
                self.update(|tables| tables.create_exercise(exercise))
            }
        }

        impl kettle_domain::SessionRepository for $store {
            fn read_sessions(
                &self,
                track_id: kettle_domain::TrackID,
                week: kettle_domain::Week,
            ) -> Result<Vec<kettle_domain::Session>, kettle_domain::ReadError> {
                self.read(|tables| tables.read_sessions(track_id, week))
            }

            fn read_session(
                &self,
                key: kettle_domain::SessionKey,
            ) -> Result<kettle_domain::Session, kettle_domain::ReadError> {
                self.read(|tables| tables.read_session(key))
            }

            fn replace_session(
                &self,
                session: kettle_domain::NewSession,
            ) -> Result<kettle_domain::Session, kettle_domain::ReplaceError> {
                self.update(|tables| tables.replace_session(session))
            }
        }
    };
}

pub(crate) use impl_repositories;

mod json_file;
mod memory;
pub mod tables;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
