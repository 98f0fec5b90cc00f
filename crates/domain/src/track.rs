use std::str::FromStr;

use derive_more::Deref;
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::{GenerateError, Name, ReadError};

pub trait TrackService {
    fn get_tracks(&self) -> Result<Vec<Track>, ReadError>;
}

pub trait TrackRepository {
    fn read_tracks(&self) -> Result<Vec<Track>, ReadError>;
    fn read_track(&self, slug: &str) -> Result<Track, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackID,
    pub slug: String,
    pub name: Name,
    pub description: String,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TrackID(Uuid);

impl TrackID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TrackID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TrackID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Weekly structure rule of a track, selected by its slug.
#[derive(
    AsRefStr, EnumString, EnumIter, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TrackKind {
    Balanced,
    Competitor,
    ConjugateStrength,
    Endurance,
    Hypertrophy,
    Foundations,
    MinimalEquipment,
    Recovery,
}

impl TrackKind {
    pub fn from_slug(slug: &str) -> Result<Self, GenerateError> {
        TrackKind::from_str(slug.trim())
            .map_err(|_| GenerateError::UnknownTrackKind(slug.to_string()))
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            TrackKind::Balanced => "Balanced Athlete",
            TrackKind::Competitor => "Competitor",
            TrackKind::ConjugateStrength => "Conjugate Strength",
            TrackKind::Endurance => "Endurance Engine",
            TrackKind::Hypertrophy => "Hypertrophy Build",
            TrackKind::Foundations => "Foundations",
            TrackKind::MinimalEquipment => "Minimal Equipment",
            TrackKind::Recovery => "Recovery & Mobility",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TrackKind::Balanced => {
                "Six days covering strength, olympic lifting, gymnastics, metcons and endurance."
            }
            TrackKind::Competitor => "Twice-daily sessions for competitive athletes.",
            TrackKind::ConjugateStrength => {
                "Max effort and dynamic effort days rotating between upper and lower body."
            }
            TrackKind::Endurance => "Zone 2, tempo, intervals and long distance work.",
            TrackKind::Hypertrophy => "Body-part split focused on muscle growth.",
            TrackKind::Foundations => "Low intensity sessions teaching the basic movements.",
            TrackKind::MinimalEquipment => "Bodyweight workouts rotating through formats.",
            TrackKind::Recovery => "Daily mobility and breathing work for recovery.",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case("balanced", TrackKind::Balanced)]
    #[case("competitor", TrackKind::Competitor)]
    #[case("conjugate-strength", TrackKind::ConjugateStrength)]
    #[case("endurance", TrackKind::Endurance)]
    #[case("hypertrophy", TrackKind::Hypertrophy)]
    #[case("foundations", TrackKind::Foundations)]
    #[case(" minimal-equipment ", TrackKind::MinimalEquipment)]
    #[case("recovery", TrackKind::Recovery)]
    fn test_track_kind_from_slug(#[case] slug: &str, #[case] expected: TrackKind) {
        assert_eq!(TrackKind::from_slug(slug).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("yoga")]
    #[case("Conjugate Strength")]
    fn test_track_kind_from_slug_unknown(#[case] slug: &str) {
        assert!(matches!(
            TrackKind::from_slug(slug),
            Err(GenerateError::UnknownTrackKind(s)) if s == slug
        ));
    }

    #[test]
    fn test_track_kind_slug_round_trip() {
        for kind in TrackKind::iter() {
            assert_eq!(kind.slug(), kind.as_ref());
            assert_eq!(TrackKind::from_slug(kind.slug()).unwrap(), kind);
        }
    }

    #[test]
    fn test_track_id_nil() {
        assert!(TrackID::nil().is_nil());
        assert_eq!(TrackID::nil(), TrackID::default());
        assert!(!TrackID::from(1).is_nil());
    }
}
