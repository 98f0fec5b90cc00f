use serde::Serialize;

use crate::{Intensity, Week};

/// Upper bound of every percentage load.
pub const MAX_PERCENT: f32 = 95.0;

const PERCENT_OF_MAX: [f32; 10] = [40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 85.0, 95.0];

const LINEAR_STEP: f32 = 2.5;

const WAVE_OFFSETS: [f32; 8] = [0.0, 2.5, 5.0, -2.5, 2.5, 5.0, 7.5, -5.0];

const DELOAD_INTERVAL: u32 = 4;
const DELOAD_FACTOR: f32 = 0.7;
const BLOCK_STEP: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Load {
    /// Percentage of the one-rep max.
    Percentage(f32),
    /// Prescribed weight in pounds.
    FixedWeight(f32),
    Bodyweight,
    None,
}

impl Load {
    #[must_use]
    pub fn load_type(&self) -> LoadType {
        match self {
            Load::Percentage(_) => LoadType::Percentage,
            Load::FixedWeight(_) => LoadType::FixedWeight,
            Load::Bodyweight => LoadType::Bodyweight,
            Load::None => LoadType::None,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<f32> {
        match self {
            Load::Percentage(value) | Load::FixedWeight(value) => Some(*value),
            Load::Bodyweight | Load::None => None,
        }
    }

    pub fn from_parts(load_type: LoadType, value: Option<f32>) -> Result<Self, LoadError> {
        match (load_type, value) {
            (LoadType::Percentage, Some(value)) => {
                if value <= 0.0 || value > MAX_PERCENT {
                    return Err(LoadError::PercentageOutOfRange(value));
                }
                Ok(Load::Percentage(value))
            }
            (LoadType::FixedWeight, Some(value)) => {
                if value <= 0.0 {
                    return Err(LoadError::InvalidWeight(value));
                }
                Ok(Load::FixedWeight(value))
            }
            (LoadType::Percentage | LoadType::FixedWeight, None) => {
                Err(LoadError::MissingValue(load_type))
            }
            (LoadType::Bodyweight, _) => Ok(Load::Bodyweight),
            (LoadType::None, _) => Ok(Load::None),
        }
    }
}

#[derive(
    strum::AsRefStr, strum::EnumString, strum::Display, Debug, Clone, Copy, PartialEq, Eq,
)]
#[strum(serialize_all = "snake_case")]
pub enum LoadType {
    Percentage,
    FixedWeight,
    Bodyweight,
    None,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("Percentage must be greater than 0 and at most 95 ({0})")]
    PercentageOutOfRange(f32),
    #[error("Weight must be greater than 0 ({0})")]
    InvalidWeight(f32),
    #[error("Load type {0} requires a value")]
    MissingValue(LoadType),
}

/// Load progression applied to a base percentage over the weeks of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progression {
    /// +2.5 % per week.
    Linear,
    /// Repeating 8-week pattern of positive and negative offsets.
    Wave,
    /// Every 4th week drops to 70 % of base, other weeks add 5 % per completed 4-week block.
    Deload,
}

impl Progression {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(self, intensity: Intensity, week: Week) -> f32 {
        let base = base_percent(intensity);
        let percent = match self {
            Progression::Linear => base + LINEAR_STEP * week.index() as f32,
            Progression::Wave => base + WAVE_OFFSETS[week.index() % WAVE_OFFSETS.len()],
            Progression::Deload => {
                if *week % DELOAD_INTERVAL == 0 {
                    base * DELOAD_FACTOR
                } else {
                    base + BLOCK_STEP * (*week - 1).div_euclid(DELOAD_INTERVAL) as f32
                }
            }
        };
        round_to_half(percent.min(MAX_PERCENT))
    }

    #[must_use]
    pub fn load(self, intensity: Intensity, week: Week) -> Load {
        Load::Percentage(self.percent(intensity, week))
    }
}

#[must_use]
pub fn base_percent(intensity: Intensity) -> f32 {
    PERCENT_OF_MAX[usize::from(*intensity - 1)]
}

fn round_to_half(percent: f32) -> f32 {
    (percent * 2.0).round() / 2.0
}
