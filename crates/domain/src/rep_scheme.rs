use std::fmt;

use rand::Rng;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingGoal {
    MaxStrength,
    Strength,
    Power,
    Hypertrophy,
    Endurance,
    Conditioning,
}

impl TrainingGoal {
    #[must_use]
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            TrainingGoal::MaxStrength => &["1", "2", "3", "5-3-1", "3-2-1-1-1"],
            TrainingGoal::Strength => &["3", "5", "4", "5-5-3-3-1", "6-4-2"],
            TrainingGoal::Power => &["2", "3", "3-2-1", "2-2-1-1"],
            TrainingGoal::Hypertrophy => &["8", "10", "12", "15", "8-10-12"],
            TrainingGoal::Endurance => &["12", "15", "20"],
            TrainingGoal::Conditioning => &["21-15-9", "15-12-9", "AMRAP", "10", "12"],
        }
    }

    /// Picks one of the candidate schemes uniformly at random.
    pub fn choose<R: Rng + ?Sized>(self, rng: &mut R) -> Reps {
        let candidates = self.candidates();
        Reps::parse(candidates[rng.gen_range(0..candidates.len())])
    }
}

/// Repetitions of an exercise: a plain count or a scheme such as "21-15-9" or "AMRAP".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reps {
    Count(u32),
    Scheme(String),
}

impl Reps {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<u32>() {
            Ok(count) => Reps::Count(count),
            Err(_) => Reps::Scheme(value.to_string()),
        }
    }

    #[must_use]
    pub fn scheme(value: &str) -> Self {
        Reps::Scheme(value.to_string())
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reps::Count(count) => write!(f, "{count}"),
            Reps::Scheme(scheme) => write!(f, "{scheme}"),
        }
    }
}

impl Serialize for Reps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reps::Count(count) => serializer.serialize_u32(*count),
            Reps::Scheme(scheme) => serializer.serialize_str(scheme),
        }
    }
}
