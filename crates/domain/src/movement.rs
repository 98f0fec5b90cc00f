//! Movement pools and the deterministic week-keyed selection over them.

use std::collections::HashSet;

use crate::{Category, Focus, Load, Week};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub name: &'static str,
    pub category: Category,
    pub load: Load,
}

const fn movement(name: &'static str, category: Category, load: Load) -> Movement {
    Movement {
        name,
        category,
        load,
    }
}

const fn bodyweight(name: &'static str, category: Category) -> Movement {
    movement(name, category, Load::Bodyweight)
}

const fn unloaded(name: &'static str, category: Category) -> Movement {
    movement(name, category, Load::None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drill {
    pub name: &'static str,
    pub category: Category,
    pub reps: Option<u32>,
    pub duration_seconds: Option<u32>,
}

const fn drill_reps(name: &'static str, category: Category, reps: u32) -> Drill {
    Drill {
        name,
        category,
        reps: Some(reps),
        duration_seconds: None,
    }
}

const fn drill_time(name: &'static str, category: Category, seconds: u32) -> Drill {
    Drill {
        name,
        category,
        reps: None,
        duration_seconds: Some(seconds),
    }
}

pub const UPPER_POOL: [&str; 6] = [
    "Bench Press",
    "Strict Press",
    "Push Press",
    "Weighted Pull-Up",
    "Pendlay Row",
    "Incline Bench Press",
];

pub const LOWER_POOL: [&str; 6] = [
    "Back Squat",
    "Front Squat",
    "Deadlift",
    "Romanian Deadlift",
    "Sumo Deadlift",
    "Bulgarian Split Squat",
];

pub const OLYMPIC_LIFTS: [&str; 6] = [
    "Power Snatch",
    "Power Clean",
    "Clean & Jerk",
    "Snatch",
    "Hang Power Clean",
    "Push Jerk",
];

const UPPER_ACCESSORIES: [&str; 8] = [
    "Dumbbell Row",
    "Dumbbell Bench Press",
    "Face Pull",
    "Ring Dip",
    "Hammer Curl",
    "Lateral Raise",
    "Chin-Up",
    "Push-Up",
];

const LOWER_ACCESSORIES: [&str; 8] = [
    "Walking Lunge",
    "Glute Bridge",
    "Hamstring Curl",
    "Step-Up",
    "Goblet Squat",
    "Single-Leg RDL",
    "Calf Raise",
    "Back Extension",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthPool {
    Upper,
    Lower,
}

impl StrengthPool {
    /// Upper-body pool for foci naming the upper body, lower-body pool otherwise.
    ///
    /// Squat and deadlift days share the mixed lower-body pool, so a deadlift day may prescribe
    /// a squat variation and the other way round.
    #[must_use]
    pub fn for_focus(focus: Focus) -> Self {
        if focus.is_upper() {
            StrengthPool::Upper
        } else {
            StrengthPool::Lower
        }
    }

    #[must_use]
    pub fn movements(self) -> &'static [&'static str] {
        match self {
            StrengthPool::Upper => &UPPER_POOL,
            StrengthPool::Lower => &LOWER_POOL,
        }
    }

    #[must_use]
    pub fn accessories(self, week: Week) -> Vec<&'static str> {
        let pool: &[&'static str] = match self {
            StrengthPool::Upper => &UPPER_ACCESSORIES,
            StrengthPool::Lower => &LOWER_ACCESSORIES,
        };
        rotate(pool, week.index() * 3, 3)
    }
}

/// Round-robin pick `pool[(week - 1) mod len]`.
///
/// A pick already in `used` is replaced by the next unused entry of the pool. The chosen name is
/// added to `used`.
pub fn select_primary(
    pool: &[&'static str],
    week: Week,
    used: &mut HashSet<String>,
) -> Option<&'static str> {
    if pool.is_empty() {
        return None;
    }
    let start = week.index() % pool.len();
    let choice = (0..pool.len())
        .map(|offset| pool[(start + offset) % pool.len()])
        .find(|name| !used.contains(*name))
        .unwrap_or(pool[start]);
    used.insert(choice.to_string());
    Some(choice)
}

#[must_use]
pub fn olympic_lift(week: Week) -> &'static str {
    OLYMPIC_LIFTS[week.index() % OLYMPIC_LIFTS.len()]
}

static SHORT_CONDITIONING: [[Movement; 2]; 3] = [
    [
        bodyweight("Burpee", Category::Conditioning),
        bodyweight("Box Jump", Category::Conditioning),
    ],
    [
        unloaded("Row", Category::Monostructural),
        movement("Wall Ball", Category::Conditioning, Load::FixedWeight(20.0)),
    ],
    [
        unloaded("Double-Under", Category::Monostructural),
        movement(
            "Kettlebell Swing",
            Category::Conditioning,
            Load::FixedWeight(53.0),
        ),
    ],
];

#[must_use]
pub fn short_conditioning(week: Week) -> &'static [Movement] {
    &SHORT_CONDITIONING[week.index() % SHORT_CONDITIONING.len()]
}

pub const METCON_STYLES: [&str; 6] = ["For Time", "AMRAP", "EMOM", "Ladder", "Tabata", "Chipper"];

#[must_use]
pub fn metcon_style(week: Week) -> &'static str {
    METCON_STYLES[week.index() % METCON_STYLES.len()]
}

pub static COMBINATIONS: [[Movement; 3]; 6] = [
    [
        movement("Thruster", Category::Strength, Load::FixedWeight(95.0)),
        bodyweight("Pull-Up", Category::Gymnastics),
        unloaded("Row", Category::Monostructural),
    ],
    [
        movement(
            "Kettlebell Swing",
            Category::Conditioning,
            Load::FixedWeight(53.0),
        ),
        bodyweight("Toes-to-Bar", Category::Gymnastics),
        unloaded("Run", Category::Monostructural),
    ],
    [
        movement("Power Clean", Category::Olympic, Load::FixedWeight(135.0)),
        bodyweight("Handstand Push-Up", Category::Gymnastics),
        unloaded("Assault Bike", Category::Monostructural),
    ],
    [
        movement("Wall Ball", Category::Conditioning, Load::FixedWeight(20.0)),
        bodyweight("Chest-to-Bar Pull-Up", Category::Gymnastics),
        unloaded("Double-Under", Category::Monostructural),
    ],
    [
        movement("Deadlift", Category::Strength, Load::FixedWeight(225.0)),
        bodyweight("Box Jump", Category::Conditioning),
        unloaded("Ski Erg", Category::Monostructural),
    ],
    [
        movement(
            "Dumbbell Snatch",
            Category::Conditioning,
            Load::FixedWeight(50.0),
        ),
        bodyweight("Burpee", Category::Conditioning),
        unloaded("Row", Category::Monostructural),
    ],
];

/// Movement combination for a metcon, `COMBINATIONS[(week + style.len()) mod 6]`.
#[must_use]
pub fn combination(week: Week, style: &str) -> &'static [Movement] {
    &COMBINATIONS[(*week as usize + style.len()) % COMBINATIONS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkMovement {
    pub movement: Movement,
    pub reps: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    pub name: &'static str,
    pub format: &'static str,
    pub duration_minutes: u32,
    pub movements: &'static [BenchmarkMovement],
}

pub static BENCHMARKS: [Benchmark; 3] = [
    Benchmark {
        name: "Fran",
        format: "21-15-9 For Time",
        duration_minutes: 10,
        movements: &[
            BenchmarkMovement {
                movement: movement("Thruster", Category::Strength, Load::FixedWeight(95.0)),
                reps: "21-15-9",
            },
            BenchmarkMovement {
                movement: bodyweight("Pull-Up", Category::Gymnastics),
                reps: "21-15-9",
            },
        ],
    },
    Benchmark {
        name: "Grace",
        format: "For Time",
        duration_minutes: 10,
        movements: &[BenchmarkMovement {
            movement: movement("Clean & Jerk", Category::Olympic, Load::FixedWeight(135.0)),
            reps: "30",
        }],
    },
    Benchmark {
        name: "Helen",
        format: "3 Rounds For Time",
        duration_minutes: 15,
        movements: &[
            BenchmarkMovement {
                movement: unloaded("Run", Category::Monostructural),
                reps: "400m",
            },
            BenchmarkMovement {
                movement: movement(
                    "Kettlebell Swing",
                    Category::Conditioning,
                    Load::FixedWeight(53.0),
                ),
                reps: "21",
            },
            BenchmarkMovement {
                movement: bodyweight("Pull-Up", Category::Gymnastics),
                reps: "12",
            },
        ],
    },
];

/// Benchmark replacing the regular metcon in every week with `week mod 6 == 1`.
#[must_use]
pub fn benchmark(week: Week) -> Option<&'static Benchmark> {
    if *week % 6 == 1 {
        Some(&BENCHMARKS[(week.index() / 6) % BENCHMARKS.len()])
    } else {
        None
    }
}

const GYMNASTICS_SKILLS: [&str; 6] = [
    "Handstand Walk",
    "Muscle-Up",
    "Pistol Squat",
    "Strict Handstand Push-Up",
    "Rope Climb",
    "L-Sit",
];

const GYMNASTICS_CONDITIONING: [&str; 7] = [
    "Toes-to-Bar",
    "Burpee Pull-Up",
    "Push-Up",
    "Air Squat",
    "Ring Row",
    "Hollow Rock",
    "Box Jump",
];

#[must_use]
pub fn gymnastics_skill(week: Week) -> &'static str {
    GYMNASTICS_SKILLS[week.index() % GYMNASTICS_SKILLS.len()]
}

#[must_use]
pub fn gymnastics_conditioning(week: Week) -> Vec<&'static str> {
    rotate(&GYMNASTICS_CONDITIONING, week.index() * 3, 3)
}

const ENDURANCE_MODALITIES: [&str; 4] = ["Row", "Run", "Assault Bike", "Ski Erg"];

#[must_use]
pub fn endurance_modality(week: Week) -> &'static str {
    ENDURANCE_MODALITIES[week.index() % ENDURANCE_MODALITIES.len()]
}

const SPRINT_PIECES: [&str; 4] = [
    "Assault Bike Sprint",
    "Row Sprint",
    "Shuttle Run",
    "Ski Erg Sprint",
];

#[must_use]
pub fn sprint_piece(week: Week) -> &'static str {
    SPRINT_PIECES[week.index() % SPRINT_PIECES.len()]
}

static UPPER_WARM_UP: [Drill; 3] = [
    drill_time("Arm Circles", Category::Mobility, 30),
    drill_reps("Band Pull-Apart", Category::Mobility, 15),
    drill_reps("Scapular Push-Up", Category::Mobility, 10),
];

static LOWER_WARM_UP: [Drill; 3] = [
    drill_reps("Leg Swings", Category::Mobility, 10),
    drill_reps("World's Greatest Stretch", Category::Mobility, 5),
    drill_reps("Air Squat", Category::Mobility, 15),
];

static GENERAL_WARM_UP: [Drill; 2] = [
    drill_time("Easy Row", Category::Monostructural, 300),
    drill_time("Joint Mobility Flow", Category::Mobility, 300),
];

/// Warm-up drills chosen by a coarse match on the focus tag.
#[must_use]
pub fn warm_up(focus: Focus) -> &'static [Drill] {
    if focus.is_upper() {
        &UPPER_WARM_UP
    } else if focus.is_lower() {
        &LOWER_WARM_UP
    } else {
        &GENERAL_WARM_UP
    }
}

static GENERIC_CIRCUITS: [[Movement; 3]; 3] = [
    [
        bodyweight("Burpee", Category::Conditioning),
        bodyweight("Air Squat", Category::Conditioning),
        bodyweight("Sit-Up", Category::Conditioning),
    ],
    [
        bodyweight("Jumping Lunge", Category::Conditioning),
        bodyweight("Push-Up", Category::Gymnastics),
        bodyweight("Mountain Climber", Category::Conditioning),
    ],
    [
        bodyweight("Jumping Jack", Category::Conditioning),
        bodyweight("Plank Hold", Category::Conditioning),
        bodyweight("Squat Jump", Category::Conditioning),
    ],
];

const RECOVERY_FLOW: [Movement; 3] = [
    unloaded("Easy Walk", Category::Monostructural),
    unloaded("Full-Body Foam Roll", Category::Mobility),
    unloaded("Child's Pose", Category::Mobility),
];

static GENERIC_BY_FOCUS: [(Focus, &[Movement]); 18] = [
    (
        Focus::FoundationSquat,
        &[
            unloaded("Goblet Squat", Category::Strength),
            unloaded("Box Squat", Category::Strength),
            bodyweight("Wall Sit", Category::Strength),
        ],
    ),
    (
        Focus::FoundationHinge,
        &[
            unloaded("Kettlebell Deadlift", Category::Strength),
            bodyweight("Glute Bridge", Category::Accessory),
            unloaded("Good Morning", Category::Strength),
        ],
    ),
    (
        Focus::FoundationPushPull,
        &[
            bodyweight("Push-Up", Category::Gymnastics),
            bodyweight("Ring Row", Category::Gymnastics),
            unloaded("Dumbbell Press", Category::Strength),
        ],
    ),
    (
        Focus::FoundationCarry,
        &[
            unloaded("Farmer Carry", Category::Strength),
            unloaded("Suitcase Carry", Category::Strength),
            bodyweight("Bear Crawl", Category::Conditioning),
        ],
    ),
    (
        Focus::Push,
        &[
            unloaded("Dumbbell Bench Press", Category::Accessory),
            unloaded("Seated Dumbbell Press", Category::Accessory),
            unloaded("Cable Fly", Category::Accessory),
            unloaded("Tricep Pushdown", Category::Accessory),
        ],
    ),
    (
        Focus::Pull,
        &[
            unloaded("Lat Pulldown", Category::Accessory),
            unloaded("Seated Cable Row", Category::Accessory),
            unloaded("Face Pull", Category::Accessory),
            unloaded("Barbell Curl", Category::Accessory),
        ],
    ),
    (
        Focus::Legs,
        &[
            unloaded("Leg Press", Category::Accessory),
            unloaded("Walking Lunge", Category::Accessory),
            unloaded("Leg Extension", Category::Accessory),
            unloaded("Hamstring Curl", Category::Accessory),
        ],
    ),
    (
        Focus::Upper,
        &[
            unloaded("Incline Dumbbell Press", Category::Accessory),
            unloaded("Chest-Supported Row", Category::Accessory),
            unloaded("Lateral Raise", Category::Accessory),
            unloaded("Hammer Curl", Category::Accessory),
        ],
    ),
    (
        Focus::Lower,
        &[
            unloaded("Hack Squat", Category::Accessory),
            unloaded("Romanian Deadlift", Category::Accessory),
            unloaded("Hip Thrust", Category::Accessory),
            unloaded("Calf Raise", Category::Accessory),
        ],
    ),
    (
        Focus::Shoulders,
        &[
            unloaded("Thread the Needle", Category::Mobility),
            unloaded("Wall Slide", Category::Mobility),
            unloaded("Sleeper Stretch", Category::Mobility),
        ],
    ),
    (
        Focus::Hips,
        &[
            unloaded("90/90 Hip Switch", Category::Mobility),
            unloaded("Pigeon Stretch", Category::Mobility),
            unloaded("Hip Flexor Stretch", Category::Mobility),
        ],
    ),
    (
        Focus::ThoracicSpine,
        &[
            unloaded("Cat-Cow", Category::Mobility),
            unloaded("Open Book", Category::Mobility),
            unloaded("Thoracic Foam Roll", Category::Mobility),
        ],
    ),
    (
        Focus::Ankles,
        &[
            unloaded("Ankle Rocks", Category::Mobility),
            unloaded("Calf Stretch", Category::Mobility),
            unloaded("Banded Ankle Distraction", Category::Mobility),
        ],
    ),
    (
        Focus::NeckAndUpperBack,
        &[
            unloaded("Chin Tuck", Category::Mobility),
            unloaded("Upper Trap Stretch", Category::Mobility),
            unloaded("Doorway Pec Stretch", Category::Mobility),
        ],
    ),
    (
        Focus::Breathing,
        &[
            unloaded("Box Breathing", Category::Mobility),
            unloaded("Crocodile Breathing", Category::Mobility),
            unloaded("90/90 Breathing", Category::Mobility),
        ],
    ),
    (Focus::FullBody, &RECOVERY_FLOW),
    (Focus::Recovery, &RECOVERY_FLOW),
    (Focus::ActiveRecovery, &RECOVERY_FLOW),
];

/// Movements of the generic block, falling back to a bodyweight circuit rotated by week.
#[must_use]
pub fn generic_movements(focus: Focus, week: Week) -> &'static [Movement] {
    let circuit: &'static [Movement] = &GENERIC_CIRCUITS[week.index() % GENERIC_CIRCUITS.len()];
    GENERIC_BY_FOCUS
        .iter()
        .find(|(f, _)| *f == focus)
        .map_or(circuit, |(_, movements)| *movements)
}

fn rotate<T: Copy>(pool: &[T], start: usize, count: usize) -> Vec<T> {
    if pool.is_empty() {
        return vec![];
    }
    (0..count.min(pool.len()))
        .map(|offset| pool[(start + offset) % pool.len()])
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn week(value: u32) -> Week {
        Week::new(value).unwrap()
    }

    #[rstest]
    #[case(Focus::UpperStrength, StrengthPool::Upper)]
    #[case(Focus::DynamicEffortUpper, StrengthPool::Upper)]
    #[case(Focus::LowerStrength, StrengthPool::Lower)]
    #[case(Focus::DeadliftStrength, StrengthPool::Lower)]
    #[case(Focus::SquatStrength, StrengthPool::Lower)]
    #[case(Focus::MaxStrength, StrengthPool::Lower)]
    fn test_strength_pool_for_focus(#[case] focus: Focus, #[case] expected: StrengthPool) {
        assert_eq!(StrengthPool::for_focus(focus), expected);
    }

    #[test]
    fn test_select_primary_round_robin() {
        let mut chosen = vec![];
        for w in 1..=12 {
            let mut used = HashSet::new();
            chosen.push(select_primary(&LOWER_POOL, week(w), &mut used).unwrap());
        }
        assert_eq!(&chosen[..6], &LOWER_POOL[..]);
        assert_eq!(&chosen[6..], &LOWER_POOL[..]);
    }

    #[test]
    fn test_select_primary_skips_used() {
        let mut used = HashSet::new();
        assert_eq!(
            select_primary(&LOWER_POOL, week(1), &mut used),
            Some("Back Squat")
        );
        assert_eq!(
            select_primary(&LOWER_POOL, week(1), &mut used),
            Some("Front Squat")
        );
        assert_eq!(
            used,
            HashSet::from(["Back Squat".to_string(), "Front Squat".to_string()])
        );
    }

    #[test]
    fn test_select_primary_all_used() {
        let mut used = LOWER_POOL
            .iter()
            .map(|m| (*m).to_string())
            .collect::<HashSet<_>>();
        assert_eq!(
            select_primary(&LOWER_POOL, week(3), &mut used),
            Some("Deadlift")
        );
        assert_eq!(select_primary(&[], week(3), &mut used), None);
    }

    #[rstest]
    #[case(1, "Power Snatch")]
    #[case(3, "Clean & Jerk")]
    #[case(6, "Push Jerk")]
    #[case(7, "Power Snatch")]
    fn test_olympic_lift(#[case] w: u32, #[case] expected: &str) {
        assert_eq!(olympic_lift(week(w)), expected);
    }

    #[rstest]
    #[case(1, "For Time")]
    #[case(2, "AMRAP")]
    #[case(6, "Chipper")]
    #[case(8, "AMRAP")]
    fn test_metcon_style(#[case] w: u32, #[case] expected: &str) {
        assert_eq!(metcon_style(week(w)), expected);
    }

    #[test]
    fn test_combination_index() {
        // (2 + "AMRAP".len()) mod 6 = 1
        assert_eq!(combination(week(2), "AMRAP")[0].name, "Kettlebell Swing");
        // (3 + "EMOM".len()) mod 6 = 1
        assert_eq!(combination(week(3), "EMOM")[0].name, "Kettlebell Swing");
        // (4 + "Ladder".len()) mod 6 = 4
        assert_eq!(combination(week(4), "Ladder")[0].name, "Deadlift");
    }

    #[rstest]
    #[case(1, Some("Fran"))]
    #[case(2, None)]
    #[case(6, None)]
    #[case(7, Some("Grace"))]
    #[case(13, Some("Helen"))]
    #[case(19, Some("Fran"))]
    fn test_benchmark(#[case] w: u32, #[case] expected: Option<&str>) {
        assert_eq!(benchmark(week(w)).map(|b| b.name), expected);
    }

    #[test]
    fn test_benchmarks_use_fixed_weight() {
        for benchmark in &BENCHMARKS {
            for m in benchmark.movements {
                assert!(!matches!(m.movement.load, Load::Percentage(_)));
            }
        }
    }

    #[test]
    fn test_combinations_differ_from_benchmarks() {
        for combination in &COMBINATIONS {
            let names = combination.iter().map(|m| m.name).collect::<HashSet<_>>();
            for benchmark in &BENCHMARKS {
                let benchmark_names = benchmark
                    .movements
                    .iter()
                    .map(|m| m.movement.name)
                    .collect::<HashSet<_>>();
                assert_ne!(names, benchmark_names);
            }
        }
    }

    #[rstest]
    #[case(Focus::UpperStrength, "Arm Circles")]
    #[case(Focus::MaxEffortLower, "Leg Swings")]
    #[case(Focus::MixedModal, "Easy Row")]
    #[case(Focus::FoundationSquat, "Easy Row")]
    fn test_warm_up(#[case] focus: Focus, #[case] first: &str) {
        assert_eq!(warm_up(focus)[0].name, first);
    }

    #[test]
    fn test_accessories_rotate() {
        assert_eq!(
            StrengthPool::Upper.accessories(week(1)),
            vec!["Dumbbell Row", "Dumbbell Bench Press", "Face Pull"]
        );
        assert_eq!(
            StrengthPool::Lower.accessories(week(3)),
            vec!["Calf Raise", "Back Extension", "Walking Lunge"]
        );
    }

    #[test]
    fn test_generic_movements() {
        assert_eq!(
            generic_movements(Focus::FoundationSquat, week(1))[0].name,
            "Goblet Squat"
        );
        assert_eq!(generic_movements(Focus::Emom, week(1))[0].name, "Burpee");
        assert_eq!(
            generic_movements(Focus::Emom, week(2))[0].name,
            "Jumping Lunge"
        );
        assert!(!generic_movements(Focus::Sprint, week(9)).is_empty());
    }
}
