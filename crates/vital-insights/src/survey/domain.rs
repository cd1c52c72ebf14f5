use serde::{Deserialize, Serialize};

/// Self-reported day-to-day activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ActivityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very high",
        }
    }
}

/// What the respondent wants out of their training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MassGain,
    Maintain,
    Health,
}

impl Goal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FatLoss => "Fat loss",
            Self::MassGain => "Mass gain",
            Self::Maintain => "Maintain shape",
            Self::Health => "Improve health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FastFoodFrequency {
    Never,
    Rarely,
    Sometimes,
    Often,
    VeryOften,
}

impl FastFoodFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Rarely => "Rarely",
            Self::Sometimes => "Sometimes",
            Self::Often => "Often",
            Self::VeryOften => "Very often",
        }
    }
}

/// One completed questionnaire. Field ranges are enforced at the HTTP
/// boundary; every scoring function still clamps so that out-of-range
/// values degrade gracefully instead of panicking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub name: String,
    pub age: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub workouts_per_week: u32,
    pub sleep_hours: f64,
    pub stress_level: u32,
    pub water_liters: f64,
    pub fastfood_frequency: FastFoodFrequency,
    pub smokes: bool,
}

impl SurveyAnswers {
    /// Trimmed name with a placeholder for blank submissions.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "friend"
        } else {
            trimmed
        }
    }
}
