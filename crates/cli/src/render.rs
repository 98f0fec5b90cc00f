use std::{collections::HashMap, fmt::Write};

use kettle_domain::{ExerciseID, Load, Session, SessionExercise, Track};

pub type ExerciseNames = HashMap<ExerciseID, String>;

pub fn tracks(tracks: &[Track]) -> String {
    let width = tracks.iter().map(|t| t.slug.len()).max().unwrap_or(0);
    tracks
        .iter()
        .map(|t| format!("{:<width$}  {}: {}\n", t.slug, t.name, t.description))
        .collect()
}

pub fn sessions(sessions: &[Session], names: &ExerciseNames) -> String {
    sessions
        .iter()
        .map(|s| session(s, names))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn session(session: &Session, names: &ExerciseNames) -> String {
    let mut out = format!(
        "{}\n  {}, {} min, intensity {}/10\n",
        session.name, session.session_type, session.duration_minutes, session.intensity
    );
    for block in &session.blocks {
        let _ = writeln!(
            out,
            "  {}. {} ({} min)",
            block.sequence, block.name, block.duration_minutes
        );
        for exercise in &block.exercises {
            let name = names
                .get(&exercise.exercise_id)
                .map_or("Unknown exercise", String::as_str);
            let _ = writeln!(out, "     - {name}{}", prescription(exercise));
            if let Some(notes) = &exercise.notes {
                let _ = writeln!(out, "       {notes}");
            }
            if let Some(scaling) = &exercise.scaling_notes {
                let _ = writeln!(out, "       Scaling: {scaling}");
            }
        }
    }
    out
}

fn prescription(exercise: &SessionExercise) -> String {
    let mut out = String::new();
    let volume = match (exercise.sets, &exercise.reps, exercise.duration_seconds) {
        (Some(sets), Some(reps), _) => Some(format!("{sets} x {reps}")),
        (Some(sets), None, Some(seconds)) => Some(format!("{sets} x {seconds}s")),
        (None, Some(reps), _) => Some(reps.to_string()),
        (None, None, Some(seconds)) => Some(format!("{seconds}s")),
        (Some(sets), None, None) => Some(format!("{sets} sets")),
        (None, None, None) => None,
    };
    if let Some(volume) = volume {
        let _ = write!(out, ": {volume}");
    }
    match exercise.load {
        Load::Percentage(percent) => {
            let _ = write!(out, " @ {percent}%");
        }
        Load::FixedWeight(weight) => {
            let _ = write!(out, " @ {weight} lb");
        }
        Load::Bodyweight => out.push_str(" (bodyweight)"),
        Load::None => {}
    }
    if let Some(rest) = exercise.rest_seconds {
        let _ = write!(out, ", rest {rest}s");
    }
    out
}

#[cfg(test)]
mod tests {
    use kettle_domain::{
        BlockType, Focus, Intensity, Name, Reps, SessionBlock, SessionKey, SessionType,
        SubSession, Week,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(
        sets: Option<u32>,
        reps: Option<Reps>,
        duration_seconds: Option<u32>,
        load: Load,
        rest_seconds: Option<u32>,
    ) -> SessionExercise {
        SessionExercise {
            exercise_id: 1.into(),
            sequence: 1,
            sets,
            reps,
            duration_seconds,
            load,
            rest_seconds,
            notes: None,
            scaling_notes: None,
        }
    }

    #[rstest]
    #[case(exercise(Some(5), Some(Reps::Count(5)), None, Load::Percentage(72.5), Some(180)), ": 5 x 5 @ 72.5%, rest 180s")]
    #[case(exercise(Some(8), None, Some(20), Load::None, Some(10)), ": 8 x 20s, rest 10s")]
    #[case(exercise(None, Some(Reps::scheme("21-15-9")), None, Load::FixedWeight(95.0), None), ": 21-15-9 @ 95 lb")]
    #[case(exercise(Some(3), Some(Reps::scheme("3-5")), None, Load::Bodyweight, None), ": 3 x 3-5 (bodyweight)")]
    #[case(exercise(None, None, None, Load::None, None), "")]
    fn test_prescription(#[case] exercise: SessionExercise, #[case] expected: &str) {
        assert_eq!(prescription(&exercise), expected);
    }

    #[test]
    fn test_session() {
        let session = Session {
            id: 1.into(),
            key: SessionKey {
                track_id: 1.into(),
                week: Week::new(1).unwrap(),
                day: 1,
                sub_session: Some(SubSession::Am),
            },
            name: Name::new("Week 1 Day 1: Max Strength (AM)").unwrap(),
            focus: Focus::MaxStrength,
            session_type: SessionType::Strength,
            duration_minutes: 60,
            intensity: Intensity::new(9).unwrap(),
            published: true,
            blocks: vec![SessionBlock {
                id: 1.into(),
                block_type: BlockType::Strength,
                name: Name::new("Max Strength: Deadlift").unwrap(),
                sequence: 2,
                duration_minutes: 50,
                exercises: vec![SessionExercise {
                    notes: Some("Work up to a heavy single.".to_string()),
                    ..exercise(Some(6), Some(Reps::Count(1)), None, Load::Percentage(90.0), Some(240))
                }],
            }],
        };
        let names = HashMap::from([(ExerciseID::from(1), "Deadlift".to_string())]);

        assert_eq!(
            super::session(&session, &names),
            "Week 1 Day 1: Max Strength (AM)\n\
             \x20 Strength, 60 min, intensity 9/10\n\
             \x20 2. Max Strength: Deadlift (50 min)\n\
             \x20    - Deadlift: 6 x 1 @ 90%, rest 240s\n\
             \x20      Work up to a heavy single.\n"
        );
    }
}
