use derive_more::{AsRef, Display};

/// Display name of a track, session, block or catalog exercise.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Case-insensitive substring match, as used for catalog lookups.
    ///
    /// Short queries match every name containing them ("Press" matches "Bench Press" and
    /// "Push Press").
    #[must_use]
    pub fn contains_ignore_case(&self, query: &str) -> bool {
        self.0.to_lowercase().contains(&query.trim().to_lowercase())
    }

    #[must_use]
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Back Squat", Ok(Name("Back Squat".to_string())))]
    #[case("  Push Jerk  ", Ok(Name("Push Jerk".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("Bench Press", "press", true)]
    #[case("Bench Press", " BENCH ", true)]
    #[case("Power Snatch", "Snatch", true)]
    #[case("Snatch", "Power Snatch", false)]
    #[case("Deadlift", "Romanian Deadlift", false)]
    fn test_name_contains_ignore_case(
        #[case] name: &str,
        #[case] query: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(
            Name::new(name).unwrap().contains_ignore_case(query),
            expected
        );
    }

    #[test]
    fn test_name_eq_ignore_case() {
        assert!(Name::new("Pull-Up").unwrap().eq_ignore_case("pull-up"));
        assert!(!Name::new("Pull-Up").unwrap().eq_ignore_case("Chest-to-Bar Pull-Up"));
    }
}
