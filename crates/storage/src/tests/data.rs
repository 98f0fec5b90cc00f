use kettle_domain as domain;

pub static TRACK: std::sync::LazyLock<domain::Track> = std::sync::LazyLock::new(|| domain::Track {
    id: 1.into(),
    slug: "balanced".to_string(),
    name: domain::Name::new("Balanced Athlete").unwrap(),
    description: "Six days of mixed training.".to_string(),
});

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: 1.into(),
        name: domain::Name::new("Back Squat").unwrap(),
        category: domain::Category::Strength,
        equipment: vec!["barbell".to_string(), "rack".to_string()],
        skill_level: domain::SkillLevel::Intermediate,
        active: true,
    });

pub static EXERCISE_2: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: 2.into(),
        name: domain::Name::new("Front Squat").unwrap(),
        category: domain::Category::Strength,
        equipment: vec![],
        skill_level: domain::SkillLevel::Unrated,
        active: true,
    });

pub static NEW_SESSION: std::sync::LazyLock<domain::NewSession> =
    std::sync::LazyLock::new(|| domain::NewSession {
        key: domain::SessionKey {
            track_id: TRACK.id,
            week: domain::Week::new(1).unwrap(),
            day: 2,
            sub_session: None,
        },
        name: domain::Name::new("Week 1 Day 2: Lower Strength").unwrap(),
        focus: domain::Focus::LowerStrength,
        session_type: domain::SessionType::Strength,
        duration_minutes: 60,
        intensity: domain::Intensity::new(8).unwrap(),
        published: true,
        blocks: vec![
            domain::NewBlock {
                block_type: domain::BlockType::WarmUp,
                name: domain::Name::new("Warm-Up").unwrap(),
                sequence: 1,
                duration_minutes: 10,
                exercises: vec![domain::SessionExercise {
                    exercise_id: EXERCISE.id,
                    sequence: 1,
                    sets: Some(1),
                    reps: Some(domain::Reps::Count(10)),
                    duration_seconds: None,
                    load: domain::Load::None,
                    rest_seconds: None,
                    notes: None,
                    scaling_notes: None,
                }],
            },
            domain::NewBlock {
                block_type: domain::BlockType::Strength,
                name: domain::Name::new("Strength: Front Squat").unwrap(),
                sequence: 2,
                duration_minutes: 30,
                exercises: vec![domain::SessionExercise {
                    exercise_id: EXERCISE_2.id,
                    sequence: 1,
                    sets: Some(5),
                    reps: Some(domain::Reps::scheme("5-5-3-3-1")),
                    duration_seconds: None,
                    load: domain::Load::Percentage(75.0),
                    rest_seconds: Some(180),
                    notes: Some("Build across sets to the prescribed load.".to_string()),
                    scaling_notes: None,
                }],
            },
        ],
    });
