use derive_more::{Deref, Display};
use strum::{AsRefStr, EnumString, IntoStaticStr};

use crate::{GenerateError, TrackKind};

/// 1-based week number of a program.
#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week(u32);

impl Week {
    pub fn new(value: u32) -> Result<Self, WeekError> {
        if value == 0 {
            return Err(WeekError::Zero);
        }
        Ok(Self(value))
    }

    /// 0-based position used for round-robin selection.
    #[must_use]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeekError {
    #[error("Week number must be 1 or greater")]
    Zero,
}

/// Target intensity on a scale from 1 to 10.
#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intensity(u8);

impl Intensity {
    pub fn new(value: u8) -> Result<Self, IntensityError> {
        if !(1..=10).contains(&value) {
            return Err(IntensityError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IntensityError {
    #[error("Intensity must be in the range 1 to 10 ({0})")]
    OutOfRange(u8),
}

#[derive(AsRefStr, EnumString, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Focus {
    UpperStrength,
    LowerStrength,
    SquatStrength,
    DeadliftStrength,
    MaxStrength,
    MaxEffortUpper,
    MaxEffortLower,
    DynamicEffortUpper,
    DynamicEffortLower,
    OlympicSkill,
    OlympicHeavy,
    MixedModal,
    Gymnastics,
    Endurance,
    #[strum(serialize = "zone2")]
    Zone2,
    Tempo,
    Intervals,
    LongDistance,
    Sprint,
    Recovery,
    ActiveRecovery,
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    FoundationSquat,
    FoundationHinge,
    FoundationPushPull,
    FoundationCarry,
    Emom,
    Amrap,
    ForTime,
    Tabata,
    Shoulders,
    Hips,
    ThoracicSpine,
    Ankles,
    NeckAndUpperBack,
    Breathing,
    FullBody,
}

impl Focus {
    #[must_use]
    pub fn is_upper(self) -> bool {
        self.as_ref().contains("upper")
    }

    #[must_use]
    pub fn is_lower(self) -> bool {
        self.as_ref().contains("lower")
    }

    /// Human readable form of the tag, e.g. "Dynamic Effort Upper".
    #[must_use]
    pub fn title(self) -> String {
        match self {
            Focus::Zone2 => "Zone 2".to_string(),
            Focus::Emom => "EMOM".to_string(),
            Focus::Amrap => "AMRAP".to_string(),
            _ => self
                .as_ref()
                .split('_')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[derive(AsRefStr, EnumString, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionType {
    Strength,
    #[strum(serialize = "Olympic Lifting")]
    OlympicLifting,
    Metcon,
    Gymnastics,
    Endurance,
    Conditioning,
    #[strum(serialize = "Max Effort")]
    MaxEffort,
    #[strum(serialize = "Dynamic Effort")]
    DynamicEffort,
    Hypertrophy,
    Foundation,
    Recovery,
}

#[derive(
    AsRefStr, EnumString, strum::Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum SubSession {
    #[strum(serialize = "AM")]
    Am,
    #[strum(serialize = "PM")]
    Pm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTemplate {
    pub day: u8,
    pub focus: Focus,
    pub intensity: Intensity,
    pub duration_minutes: u32,
    pub session_type: SessionType,
    pub sub_session: Option<SubSession>,
}

impl DayTemplate {
    const fn new(
        day: u8,
        focus: Focus,
        intensity: u8,
        duration_minutes: u32,
        session_type: SessionType,
    ) -> Self {
        Self {
            day,
            focus,
            intensity: Intensity(intensity),
            duration_minutes,
            session_type,
            sub_session: None,
        }
    }

    const fn am(mut self) -> Self {
        self.sub_session = Some(SubSession::Am);
        self
    }

    const fn pm(mut self) -> Self {
        self.sub_session = Some(SubSession::Pm);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    pub week: Week,
    pub days: Vec<DayTemplate>,
}

/// Resolves a track slug into the day templates of the given week.
pub fn resolve(slug: &str, week: Week) -> Result<WeekPlan, GenerateError> {
    Ok(TrackKind::from_slug(slug)?.week_plan(week))
}

const CONJUGATE_ROTATION: [Focus; 4] = [
    Focus::MaxEffortUpper,
    Focus::MaxEffortLower,
    Focus::DynamicEffortUpper,
    Focus::DynamicEffortLower,
];

const WORKOUT_FORMATS: [Focus; 5] = [
    Focus::Emom,
    Focus::Amrap,
    Focus::ForTime,
    Focus::Intervals,
    Focus::Tabata,
];

const RECOVERY_ROTATION: [Focus; 7] = [
    Focus::Shoulders,
    Focus::Hips,
    Focus::ThoracicSpine,
    Focus::Ankles,
    Focus::NeckAndUpperBack,
    Focus::Breathing,
    Focus::FullBody,
];

impl TrackKind {
    #[must_use]
    pub fn week_plan(self, week: Week) -> WeekPlan {
        let days = match self {
            TrackKind::Balanced => balanced(),
            TrackKind::Competitor => competitor(),
            TrackKind::ConjugateStrength => conjugate(),
            TrackKind::Endurance => endurance(),
            TrackKind::Hypertrophy => hypertrophy(),
            TrackKind::Foundations => foundations(),
            TrackKind::MinimalEquipment => minimal_equipment(week),
            TrackKind::Recovery => recovery(week),
        };
        WeekPlan { week, days }
    }
}

fn balanced() -> Vec<DayTemplate> {
    vec![
        DayTemplate::new(1, Focus::UpperStrength, 8, 60, SessionType::Strength),
        DayTemplate::new(2, Focus::LowerStrength, 8, 60, SessionType::Strength),
        DayTemplate::new(3, Focus::OlympicSkill, 7, 60, SessionType::OlympicLifting),
        DayTemplate::new(4, Focus::MixedModal, 8, 60, SessionType::Metcon),
        DayTemplate::new(5, Focus::Gymnastics, 6, 60, SessionType::Gymnastics),
        DayTemplate::new(6, Focus::Endurance, 5, 60, SessionType::Endurance),
    ]
}

fn competitor() -> Vec<DayTemplate> {
    vec![
        DayTemplate::new(1, Focus::MaxStrength, 9, 75, SessionType::Strength).am(),
        DayTemplate::new(1, Focus::Sprint, 8, 45, SessionType::Conditioning).pm(),
        DayTemplate::new(2, Focus::OlympicHeavy, 8, 75, SessionType::OlympicLifting).am(),
        DayTemplate::new(2, Focus::MixedModal, 8, 45, SessionType::Metcon).pm(),
        DayTemplate::new(3, Focus::SquatStrength, 8, 60, SessionType::Strength).am(),
        DayTemplate::new(3, Focus::Endurance, 6, 45, SessionType::Endurance).pm(),
        DayTemplate::new(4, Focus::ActiveRecovery, 2, 45, SessionType::Recovery),
        DayTemplate::new(5, Focus::DeadliftStrength, 8, 60, SessionType::Strength).am(),
        DayTemplate::new(5, Focus::Gymnastics, 7, 45, SessionType::Gymnastics).pm(),
        DayTemplate::new(6, Focus::UpperStrength, 8, 60, SessionType::Strength).am(),
        DayTemplate::new(6, Focus::MixedModal, 9, 45, SessionType::Metcon).pm(),
        DayTemplate::new(7, Focus::Endurance, 6, 60, SessionType::Endurance),
    ]
}

fn conjugate() -> Vec<DayTemplate> {
    (1..=4)
        .map(|day: u8| {
            let focus = CONJUGATE_ROTATION[usize::from(day - 1) % CONJUGATE_ROTATION.len()];
            match focus {
                Focus::MaxEffortUpper | Focus::MaxEffortLower => {
                    DayTemplate::new(day, focus, 9, 75, SessionType::MaxEffort)
                }
                _ => DayTemplate::new(day, focus, 7, 75, SessionType::DynamicEffort),
            }
        })
        .collect()
}

fn endurance() -> Vec<DayTemplate> {
    vec![
        DayTemplate::new(1, Focus::Zone2, 4, 60, SessionType::Endurance),
        DayTemplate::new(2, Focus::Tempo, 6, 45, SessionType::Endurance),
        DayTemplate::new(3, Focus::Intervals, 8, 45, SessionType::Endurance),
        DayTemplate::new(4, Focus::LongDistance, 5, 90, SessionType::Endurance),
        DayTemplate::new(5, Focus::Recovery, 2, 30, SessionType::Recovery),
    ]
}

fn hypertrophy() -> Vec<DayTemplate> {
    vec![
        DayTemplate::new(1, Focus::Push, 7, 60, SessionType::Hypertrophy),
        DayTemplate::new(2, Focus::Pull, 7, 60, SessionType::Hypertrophy),
        DayTemplate::new(3, Focus::Legs, 7, 60, SessionType::Hypertrophy),
        DayTemplate::new(4, Focus::Upper, 6, 60, SessionType::Hypertrophy),
        DayTemplate::new(5, Focus::Lower, 6, 60, SessionType::Hypertrophy),
    ]
}

fn foundations() -> Vec<DayTemplate> {
    vec![
        DayTemplate::new(1, Focus::FoundationSquat, 3, 45, SessionType::Foundation),
        DayTemplate::new(2, Focus::FoundationHinge, 3, 45, SessionType::Foundation),
        DayTemplate::new(3, Focus::FoundationPushPull, 3, 45, SessionType::Foundation),
        DayTemplate::new(4, Focus::FoundationCarry, 3, 45, SessionType::Foundation),
    ]
}

fn minimal_equipment(week: Week) -> Vec<DayTemplate> {
    (1..=5)
        .map(|day: u8| {
            let focus =
                WORKOUT_FORMATS[(usize::from(day - 1) + week.index()) % WORKOUT_FORMATS.len()];
            DayTemplate::new(day, focus, 7, 30, SessionType::Conditioning)
        })
        .collect()
}

fn recovery(week: Week) -> Vec<DayTemplate> {
    (1..=7)
        .map(|day: u8| {
            let focus =
                RECOVERY_ROTATION[(usize::from(day - 1) + week.index()) % RECOVERY_ROTATION.len()];
            DayTemplate::new(day, focus, 1, 30, SessionType::Recovery)
        })
        .collect()
}
