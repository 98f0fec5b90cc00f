use std::{collections::HashMap, sync::Arc, thread};

use kettle_domain::{
    BlockType, ExerciseID, ExerciseService, Focus, GenerateError, GenerationRequest,
    GenerationService, Load, MAX_PERCENT, Reps, ScheduleService, Service, Session, SessionType,
    TrackKind, Week, movement,
};
use kettle_storage::{JsonFileStore, MemoryStore};
use pretty_assertions::assert_eq;
use rstest::rstest;
use strum::IntoEnumIterator;

fn service() -> Service<MemoryStore> {
    Service::new(MemoryStore::new().unwrap()).with_seed(Some(1))
}

fn request(track: &str, start_week: u32, week_count: u32) -> GenerationRequest {
    GenerationRequest {
        track: track.to_string(),
        start_week,
        week_count,
    }
}

fn week(value: u32) -> Week {
    Week::new(value).unwrap()
}

fn exercise_names<R>(service: &Service<R>) -> HashMap<ExerciseID, String>
where
    Service<R>: ExerciseService,
{
    service
        .get_exercises()
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.name.to_string()))
        .collect()
}

fn session_with_focus(sessions: &[Session], focus: Focus) -> &Session {
    sessions.iter().find(|s| s.focus == focus).unwrap()
}

#[test]
fn test_regeneration_is_idempotent() {
    let service = service();
    service.generate(&request("balanced", 1, 1)).unwrap();
    let first = service.get_week("balanced", week(1)).unwrap();
    let catalog_size = service.get_exercises().unwrap().len();

    let result = service.generate(&request("balanced", 1, 1)).unwrap();
    let second = service.get_week("balanced", week(1)).unwrap();

    assert_eq!(result.workouts_created, 6);
    assert_eq!(first.len(), 6);
    assert_eq!(second.len(), 6);
    assert_eq!(service.repository().tables().sessions.len(), 6);
    assert_eq!(service.get_exercises().unwrap().len(), catalog_size);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.key, b.key);
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn test_regeneration_with_json_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kettle.json");
    let service = Service::new(JsonFileStore::open(&path).unwrap());
    service.generate(&request("foundations", 1, 2)).unwrap();
    service.generate(&request("foundations", 2, 1)).unwrap();

    let reopened = Service::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(reopened.get_week("foundations", week(1)).unwrap().len(), 4);
    assert_eq!(reopened.get_week("foundations", week(2)).unwrap().len(), 4);
}

#[test]
fn test_strength_round_robin() {
    let service = service();
    let pool = movement::LOWER_POOL;
    let weeks = u32::try_from(pool.len()).unwrap();
    service.generate(&request("balanced", 1, weeks)).unwrap();
    let names = exercise_names(&service);

    let chosen = (1..=weeks)
        .map(|w| {
            let sessions = service.get_week("balanced", week(w)).unwrap();
            let session = session_with_focus(&sessions, Focus::LowerStrength);
            let block = session
                .blocks
                .iter()
                .find(|b| b.block_type == BlockType::Strength)
                .unwrap();
            names[&block.exercises[0].exercise_id].clone()
        })
        .collect::<Vec<_>>();

    assert_eq!(chosen, pool.map(ToString::to_string).to_vec());
}

#[test]
fn test_used_exercises_are_cleared_every_second_week() {
    let service = service();
    service.generate(&request("competitor", 1, 3)).unwrap();
    let names = exercise_names(&service);

    let lower_picks = |w: u32| {
        service
            .get_week("competitor", week(w))
            .unwrap()
            .iter()
            .filter(|s| {
                matches!(
                    s.focus,
                    Focus::MaxStrength | Focus::SquatStrength | Focus::DeadliftStrength
                )
            })
            .map(|s| {
                let block = s
                    .blocks
                    .iter()
                    .find(|b| b.block_type == BlockType::Strength)
                    .unwrap();
                names[&block.exercises[0].exercise_id].clone()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(lower_picks(1), vec!["Back Squat", "Front Squat", "Deadlift"]);
    assert_eq!(
        lower_picks(2),
        vec!["Romanian Deadlift", "Sumo Deadlift", "Bulgarian Split Squat"]
    );
    assert_eq!(
        lower_picks(3),
        vec!["Deadlift", "Romanian Deadlift", "Sumo Deadlift"]
    );
}

#[test]
fn test_benchmark_periodicity() {
    let service = service();
    service.generate(&request("balanced", 1, 13)).unwrap();
    let names = exercise_names(&service);

    for w in 1..=13 {
        let sessions = service.get_week("balanced", week(w)).unwrap();
        let metcon = &session_with_focus(&sessions, Focus::MixedModal).blocks[1];
        let exercises = metcon
            .exercises
            .iter()
            .map(|e| (names[&e.exercise_id].clone(), e.reps.clone()))
            .collect::<Vec<_>>();

        if let Some(benchmark) = movement::benchmark(week(w)) {
            assert_eq!(metcon.name.to_string(), format!("Benchmark: {}", benchmark.name));
            assert_eq!(
                exercises,
                benchmark
                    .movements
                    .iter()
                    .map(|m| (m.movement.name.to_string(), Some(Reps::parse(m.reps))))
                    .collect::<Vec<_>>()
            );
        } else {
            assert!(!metcon.name.to_string().starts_with("Benchmark"));
        }
    }
}

#[test]
fn test_percentage_loads_are_bounded() {
    let service = service();
    for kind in TrackKind::iter() {
        service.generate(&request(kind.slug(), 1, 9)).unwrap();
        for w in 1..=9 {
            for session in service.get_week(kind.slug(), week(w)).unwrap() {
                for block in &session.blocks {
                    for exercise in &block.exercises {
                        if let Load::Percentage(percent) = exercise.load {
                            assert!(percent > 0.0 && percent <= MAX_PERCENT);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_sessions_are_complete() {
    let service = service();
    let names = exercise_names(&service);
    assert!(names.is_empty());

    for kind in TrackKind::iter() {
        let result = service.generate(&request(kind.slug(), 1, 2)).unwrap();
        assert_eq!(result.weeks_generated, 2);
        assert_eq!(result.sessions.len(), result.workouts_created as usize);

        let names = exercise_names(&service);
        for w in 1..=2 {
            for session in service.get_week(kind.slug(), week(w)).unwrap() {
                assert!(!session.blocks.is_empty());
                assert_eq!(session.blocks[0].block_type, BlockType::WarmUp);
                assert_eq!(
                    session.blocks.iter().map(|b| b.sequence).collect::<Vec<_>>(),
                    (1..=u32::try_from(session.blocks.len()).unwrap()).collect::<Vec<_>>()
                );
                for block in &session.blocks[1..] {
                    assert!(!block.exercises.is_empty(), "{}", block.name);
                }
                for block in &session.blocks {
                    for exercise in &block.exercises {
                        assert!(names.contains_key(&exercise.exercise_id));
                    }
                }
            }
        }
    }
}

#[test]
fn test_foundations_scenario() {
    let service = service();
    let result = service.generate(&request("foundations", 1, 1)).unwrap();
    assert_eq!(result.track_name, "Foundations");
    assert_eq!(result.workouts_created, 4);
    assert_eq!(
        result.sessions.iter().map(|s| s.day).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );

    for session in service.get_week("foundations", week(1)).unwrap() {
        assert_eq!(session.session_type, SessionType::Foundation);
        assert_eq!(*session.intensity, 3);
        assert_eq!(session.duration_minutes, 45);
        assert_eq!(
            session
                .blocks
                .iter()
                .map(|b| b.block_type)
                .collect::<Vec<_>>(),
            vec![BlockType::WarmUp, BlockType::Conditioning]
        );
    }
}

#[test]
fn test_conjugate_scenario() {
    let service = service();
    service
        .generate(&request("conjugate-strength", 3, 1))
        .unwrap();
    let sessions = service.get_day("conjugate-strength", week(3), 3).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].focus, Focus::DynamicEffortUpper);
    assert_eq!(*sessions[0].intensity, 7);
    assert_eq!(sessions[0].duration_minutes, 75);
}

#[test]
fn test_twice_daily_sessions() {
    let service = service();
    service.generate(&request("competitor", 1, 1)).unwrap();
    service.generate(&request("competitor", 1, 1)).unwrap();

    assert_eq!(service.get_week("competitor", week(1)).unwrap().len(), 12);
    let day = service.get_day("competitor", week(1), 1).unwrap();
    assert_eq!(
        day.iter().map(|s| s.name.to_string()).collect::<Vec<_>>(),
        vec![
            "Week 1 Day 1: Max Strength (AM)",
            "Week 1 Day 1: Sprint (PM)"
        ]
    );
}

#[rstest]
#[case("yoga")]
#[case("")]
fn test_unknown_track(#[case] track: &str) {
    let service = service();
    assert!(matches!(
        service.generate(&request(track, 1, 1)),
        Err(GenerateError::UnknownTrackKind(_))
    ));
    assert!(service.repository().tables().sessions.is_empty());
}

#[test]
fn test_generate_largest_week() {
    let service = service();
    let result = service
        .generate(&request("foundations", u32::MAX, 1))
        .unwrap();
    assert_eq!(result.weeks_generated, 1);
    assert_eq!(
        service.get_week("foundations", week(u32::MAX)).unwrap().len(),
        4
    );
}

#[rstest]
#[case(0, 1)]
#[case(1, 0)]
#[case(u32::MAX, 2)]
fn test_invalid_request(#[case] start_week: u32, #[case] week_count: u32) {
    assert!(matches!(
        service().generate(&request("balanced", start_week, week_count)),
        Err(GenerateError::InvalidRequest(_))
    ));
}

#[test]
fn test_concurrent_generation_for_different_tracks() {
    let service = Arc::new(service());
    let handles = TrackKind::iter()
        .map(|kind| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.generate(&request(kind.slug(), 1, 2)))
        })
        .collect::<Vec<_>>();

    let created = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap().workouts_created)
        .sum::<u32>();

    let expected = TrackKind::iter()
        .map(|kind| {
            u32::try_from(
                kind.week_plan(week(1)).days.len() + kind.week_plan(week(2)).days.len(),
            )
            .unwrap()
        })
        .sum::<u32>();
    assert_eq!(created, expected);
    assert_eq!(
        service.repository().tables().sessions.len(),
        expected as usize
    );
}
