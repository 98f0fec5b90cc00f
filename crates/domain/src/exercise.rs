use derive_more::Deref;
use serde::Serialize;
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::{CreateError, Name, ReadError};

pub trait ExerciseService {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

/// Shared exercise catalog. Rows are only ever created or reused by the generator.
pub trait ExerciseRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    /// Case-insensitive substring match on the exercise name.
    fn find_exercise(&self, name: &str) -> Result<Option<Exercise>, ReadError>;
    fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, CreateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: Category,
    pub equipment: Vec<String>,
    pub skill_level: SkillLevel,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub name: Name,
    pub category: Category,
    pub equipment: Vec<String>,
    pub skill_level: SkillLevel,
    pub active: bool,
}

impl NewExercise {
    /// Catalog entry created on first use, with placeholder equipment and skill level.
    #[must_use]
    pub fn placeholder(name: Name, category: Category) -> Self {
        Self {
            name,
            category,
            equipment: vec![],
            skill_level: SkillLevel::Unrated,
            active: true,
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRefStr, EnumString, strum::Display, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength,
    Olympic,
    Gymnastics,
    Monostructural,
    Accessory,
    Conditioning,
    Mobility,
}

#[derive(AsRefStr, EnumString, strum::Display, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SkillLevel {
    #[default]
    Unrated,
    Beginner,
    Intermediate,
    Advanced,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_new_exercise_placeholder() {
        let exercise =
            NewExercise::placeholder(Name::new("Wall Ball").unwrap(), Category::Conditioning);
        assert_eq!(exercise.equipment, Vec::<String>::new());
        assert_eq!(exercise.skill_level, SkillLevel::Unrated);
        assert!(exercise.active);
    }

    #[rstest]
    #[case(Category::Strength, "strength")]
    #[case(Category::Monostructural, "monostructural")]
    #[case(Category::Mobility, "mobility")]
    fn test_category_str(#[case] category: Category, #[case] value: &str) {
        assert_eq!(category.as_ref(), value);
        assert_eq!(value.parse::<Category>().unwrap(), category);
    }

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseID::nil().is_nil());
        assert_eq!(ExerciseID::nil(), ExerciseID::default());
    }
}
