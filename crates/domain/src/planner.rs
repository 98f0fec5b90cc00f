use serde::Serialize;
use strum::{AsRefStr, EnumString};

use crate::{
    Category, DayTemplate, Focus, GeneratorSession, Load, Progression, Reps, SessionType,
    StrengthPool, TrainingGoal, Week, movement,
};

pub const WARM_UP_MINUTES: u32 = 10;

#[derive(AsRefStr, EnumString, strum::Display, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    #[strum(serialize = "Warm-Up")]
    #[serde(rename = "Warm-Up")]
    WarmUp,
    Strength,
    Skill,
    Accessory,
    Metcon,
    Endurance,
    Conditioning,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Block {
    pub block_type: BlockType,
    pub name: String,
    pub sequence: u32,
    pub duration_minutes: u32,
    pub exercises: Vec<ExerciseAssignment>,
}

impl Block {
    fn new(
        block_type: BlockType,
        name: impl Into<String>,
        duration_minutes: u32,
        exercises: Vec<ExerciseAssignment>,
    ) -> Self {
        Self {
            block_type,
            name: name.into(),
            sequence: 0,
            duration_minutes,
            exercises,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExerciseAssignment {
    pub exercise_name: String,
    pub category: Category,
    pub sets: Option<u32>,
    pub reps: Option<Reps>,
    pub duration_seconds: Option<u32>,
    pub load: Load,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
    pub scaling_notes: Option<String>,
}

impl ExerciseAssignment {
    #[must_use]
    pub fn new(exercise_name: impl Into<String>, category: Category) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            category,
            sets: None,
            reps: None,
            duration_seconds: None,
            load: Load::None,
            rest_seconds: None,
            notes: None,
            scaling_notes: None,
        }
    }

    #[must_use]
    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    #[must_use]
    pub fn reps(mut self, reps: Reps) -> Self {
        self.reps = Some(reps);
        self
    }

    #[must_use]
    pub fn duration_seconds(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn load(mut self, load: Load) -> Self {
        self.load = load;
        self
    }

    #[must_use]
    pub fn rest_seconds(mut self, seconds: u32) -> Self {
        self.rest_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn scaling_notes(mut self, notes: impl Into<String>) -> Self {
        self.scaling_notes = Some(notes.into());
        self
    }
}

/// Plans the ordered blocks of one day. The warm-up always comes first.
pub fn plan_day(day: &DayTemplate, week: Week, session: &mut GeneratorSession) -> Vec<Block> {
    let minutes = day.duration_minutes.saturating_sub(WARM_UP_MINUTES);
    let mut blocks = vec![warm_up(day.focus)];

    match day.focus {
        Focus::UpperStrength
        | Focus::LowerStrength
        | Focus::SquatStrength
        | Focus::DeadliftStrength
        | Focus::DynamicEffortUpper
        | Focus::DynamicEffortLower => {
            let strength_minutes = minutes * 3 / 5;
            blocks.push(strength(day, week, session, strength_minutes));
            blocks.push(accessory(day, week, session, minutes - strength_minutes));
        }
        Focus::OlympicSkill | Focus::OlympicHeavy => {
            let skill_minutes = minutes * 2 / 3;
            blocks.push(olympic_skill(day, week, session, skill_minutes));
            blocks.push(short_conditioning(week, session, minutes - skill_minutes));
        }
        Focus::MixedModal => blocks.push(metcon(week, session, minutes)),
        Focus::Gymnastics => {
            let skill_minutes = minutes / 2;
            blocks.push(gymnastics_skill(week, skill_minutes));
            blocks.push(gymnastics_conditioning(
                week,
                session,
                minutes - skill_minutes,
            ));
        }
        Focus::Endurance | Focus::Zone2 | Focus::Tempo | Focus::LongDistance => {
            blocks.push(endurance(day.focus, week, minutes));
        }
        Focus::MaxStrength | Focus::MaxEffortUpper | Focus::MaxEffortLower => {
            blocks.push(max_strength(day, week, session, minutes));
        }
        Focus::Sprint | Focus::Intervals => blocks.push(high_intensity(day.focus, week, minutes)),
        _ => blocks.push(generic(day, week, session, minutes)),
    }

    for (sequence, block) in (1..).zip(blocks.iter_mut()) {
        block.sequence = sequence;
    }

    blocks
}

fn warm_up(focus: Focus) -> Block {
    Block::new(
        BlockType::WarmUp,
        "Warm-Up",
        WARM_UP_MINUTES,
        movement::warm_up(focus)
            .iter()
            .map(|drill| {
                let mut assignment = ExerciseAssignment::new(drill.name, drill.category).sets(1);
                assignment.reps = drill.reps.map(Reps::Count);
                assignment.duration_seconds = drill.duration_seconds;
                assignment
            })
            .collect(),
    )
}

fn strength(
    day: &DayTemplate,
    week: Week,
    session: &mut GeneratorSession,
    minutes: u32,
) -> Block {
    let dynamic = matches!(
        day.focus,
        Focus::DynamicEffortUpper | Focus::DynamicEffortLower
    );
    let pool = StrengthPool::for_focus(day.focus);
    let Some(name) = movement::select_primary(pool.movements(), week, session.used_exercises_mut())
    else {
        return Block::new(BlockType::Strength, "Strength", minutes, vec![]);
    };
    let (goal, sets, rest, notes) = if dynamic {
        (
            TrainingGoal::Power,
            8,
            60,
            "Move the bar as fast as possible on every rep.",
        )
    } else {
        (
            TrainingGoal::Strength,
            5,
            180,
            "Build across sets to the prescribed load.",
        )
    };
    let assignment = ExerciseAssignment::new(name, Category::Strength)
        .sets(sets)
        .reps(goal.choose(session.rng()))
        .load(Progression::Deload.load(day.intensity, week))
        .rest_seconds(rest)
        .notes(notes);
    let prefix = if dynamic { "Dynamic Effort" } else { "Strength" };
    Block::new(
        BlockType::Strength,
        format!("{prefix}: {name}"),
        minutes,
        vec![assignment],
    )
}

fn accessory(
    day: &DayTemplate,
    week: Week,
    session: &mut GeneratorSession,
    minutes: u32,
) -> Block {
    let exercises = StrengthPool::for_focus(day.focus)
        .accessories(week)
        .into_iter()
        .map(|name| {
            ExerciseAssignment::new(name, Category::Accessory)
                .sets(3)
                .reps(TrainingGoal::Hypertrophy.choose(session.rng()))
                .rest_seconds(60)
                .notes("Moderate load, controlled tempo.")
        })
        .collect();
    Block::new(BlockType::Accessory, "Accessory", minutes, exercises)
}

fn olympic_skill(
    day: &DayTemplate,
    week: Week,
    session: &mut GeneratorSession,
    minutes: u32,
) -> Block {
    let lift = movement::olympic_lift(week);
    let assignment = ExerciseAssignment::new(lift, Category::Olympic)
        .sets(6)
        .reps(TrainingGoal::Power.choose(session.rng()))
        .load(Progression::Wave.load(day.intensity, week))
        .rest_seconds(120)
        .scaling_notes("Lift from the hang or from blocks if the full lift breaks down.");
    Block::new(
        BlockType::Skill,
        format!("Olympic Skill: {lift}"),
        minutes,
        vec![assignment],
    )
}

fn short_conditioning(week: Week, session: &mut GeneratorSession, minutes: u32) -> Block {
    let exercises = movement::short_conditioning(week)
        .iter()
        .map(|m| {
            ExerciseAssignment::new(m.name, m.category)
                .reps(TrainingGoal::Endurance.choose(session.rng()))
                .load(m.load)
                .notes("As many rounds as possible.")
        })
        .collect();
    Block::new(
        BlockType::Conditioning,
        format!("{minutes}-Minute AMRAP"),
        minutes,
        exercises,
    )
}

fn metcon(week: Week, session: &mut GeneratorSession, minutes: u32) -> Block {
    if let Some(benchmark) = movement::benchmark(week) {
        let exercises = benchmark
            .movements
            .iter()
            .map(|m| {
                ExerciseAssignment::new(m.movement.name, m.movement.category)
                    .reps(Reps::parse(m.reps))
                    .load(m.movement.load)
                    .notes(benchmark.format)
            })
            .collect();
        return Block::new(
            BlockType::Metcon,
            format!("Benchmark: {}", benchmark.name),
            benchmark.duration_minutes,
            exercises,
        );
    }

    let style = movement::metcon_style(week);
    let reps = TrainingGoal::Conditioning.choose(session.rng());
    let exercises = movement::combination(week, style)
        .iter()
        .map(|m| {
            let assignment = ExerciseAssignment::new(m.name, m.category)
                .load(m.load)
                .notes(style);
            match style {
                "Tabata" => assignment.sets(8).duration_seconds(20).rest_seconds(10),
                "Ladder" => assignment.reps(Reps::scheme("2-4-6-8-10-12")),
                _ => assignment.reps(reps.clone()),
            }
        })
        .collect();
    Block::new(BlockType::Metcon, format!("{style} Metcon"), minutes, exercises)
}

const GYMNASTICS_SCALING: &str = "Use a banded or box-assisted progression.";

fn gymnastics_skill(week: Week, minutes: u32) -> Block {
    let skill = movement::gymnastics_skill(week);
    let assignment = ExerciseAssignment::new(skill, Category::Gymnastics)
        .sets(5)
        .reps(Reps::scheme("3-5"))
        .load(Load::Bodyweight)
        .rest_seconds(90)
        .notes("Quality reps only.")
        .scaling_notes(GYMNASTICS_SCALING);
    Block::new(
        BlockType::Skill,
        format!("Gymnastics Skill: {skill}"),
        minutes,
        vec![assignment],
    )
}

fn gymnastics_conditioning(week: Week, session: &mut GeneratorSession, minutes: u32) -> Block {
    let exercises = movement::gymnastics_conditioning(week)
        .into_iter()
        .map(|name| {
            ExerciseAssignment::new(name, Category::Gymnastics)
                .reps(TrainingGoal::Endurance.choose(session.rng()))
                .load(Load::Bodyweight)
                .notes("Alternate movements every minute.")
                .scaling_notes(GYMNASTICS_SCALING)
        })
        .collect();
    Block::new(
        BlockType::Conditioning,
        format!("{minutes}-Minute EMOM"),
        minutes,
        exercises,
    )
}

fn endurance(focus: Focus, week: Week, minutes: u32) -> Block {
    let modality = movement::endurance_modality(week);
    let assignment = ExerciseAssignment::new(modality, Category::Monostructural);
    let assignment = match focus {
        Focus::Tempo => assignment
            .sets(3)
            .duration_seconds(600)
            .rest_seconds(120)
            .notes("Comfortably hard, sustainable pace."),
        Focus::LongDistance => assignment
            .sets(1)
            .duration_seconds(minutes * 60)
            .notes("Long steady effort at conversational pace."),
        _ => assignment
            .sets(1)
            .duration_seconds(minutes * 60)
            .notes("Zone 2: nasal breathing, conversational pace."),
    };
    Block::new(
        BlockType::Endurance,
        format!("{}: {modality}", focus.title()),
        minutes,
        vec![assignment],
    )
}

fn max_strength(
    day: &DayTemplate,
    week: Week,
    session: &mut GeneratorSession,
    minutes: u32,
) -> Block {
    let pool = StrengthPool::for_focus(day.focus);
    let Some(name) = movement::select_primary(pool.movements(), week, session.used_exercises_mut())
    else {
        return Block::new(BlockType::Strength, "Max Strength", minutes, vec![]);
    };
    let assignment = ExerciseAssignment::new(name, Category::Strength)
        .sets(6)
        .reps(TrainingGoal::MaxStrength.choose(session.rng()))
        .load(Progression::Linear.load(day.intensity, week))
        .rest_seconds(240)
        .notes("Build to a heavy set, leave one rep in reserve.");
    Block::new(
        BlockType::Strength,
        format!("Max Strength: {name}"),
        minutes,
        vec![assignment],
    )
}

fn high_intensity(focus: Focus, week: Week, minutes: u32) -> Block {
    let piece = movement::sprint_piece(week);
    let (sets, work, rest) = if focus == Focus::Sprint {
        (8, 20, 100)
    } else {
        (10, 40, 80)
    };
    let assignment = ExerciseAssignment::new(piece, Category::Monostructural)
        .sets(sets)
        .duration_seconds(work)
        .rest_seconds(rest)
        .notes("All-out effort on every interval.");
    Block::new(
        BlockType::Conditioning,
        format!("{}: {piece}", focus.title()),
        minutes,
        vec![assignment],
    )
}

fn generic(day: &DayTemplate, week: Week, session: &mut GeneratorSession, minutes: u32) -> Block {
    let exercises = movement::generic_movements(day.focus, week)
        .iter()
        .map(|m| {
            let assignment = ExerciseAssignment::new(m.name, m.category).load(m.load);
            match day.session_type {
                SessionType::Recovery => assignment
                    .sets(2)
                    .duration_seconds(60)
                    .notes("Slow and controlled, breathe through the nose."),
                SessionType::Hypertrophy => assignment
                    .sets(4)
                    .reps(TrainingGoal::Hypertrophy.choose(session.rng()))
                    .rest_seconds(90)
                    .notes("Last set close to failure."),
                SessionType::Foundation => assignment
                    .sets(3)
                    .reps(TrainingGoal::Endurance.choose(session.rng()))
                    .rest_seconds(60)
                    .notes("Focus on position over load."),
                _ => assignment
                    .sets(3)
                    .reps(TrainingGoal::Conditioning.choose(session.rng())),
            }
        })
        .collect();
    Block::new(BlockType::Conditioning, day.focus.title(), minutes, exercises)
}
