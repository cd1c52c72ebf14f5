use crate::survey::domain::Goal;
use serde::Serialize;

/// Version tag stamped on every report so consumers can detect algorithm
/// changes.
pub const REPORT_VERSION: &str = "insights.v2";

/// Echo of who the report is about.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub name: String,
    pub age: u32,
    pub goal: Goal,
}

/// The ten composite gauges, each computed once per report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Gauges {
    pub health_index: u8,
    pub activity_score: u8,
    pub recovery_quality: u8,
    pub lifestyle_balance: u8,
    pub energy_index: u8,
    pub metabolic_load: u8,
    pub cardio_risk: u8,
    pub consistency: u8,
    pub readiness: u8,
    pub confidence: u8,
}

/// All eleven subscores, atomic and derived.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scores {
    pub activity: u8,
    pub sleep: u8,
    pub stress: u8,
    pub hydration: u8,
    pub nutrition: u8,
    pub smoking: u8,
    pub age_modifier: u8,
    pub movement_neat: u8,
    pub recovery_debt: u8,
    pub nutrition_stability: u8,
    pub habit_score: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadarPoint {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartPoint {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u8,
}

/// Two-part split for the pie-style chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Donut {
    pub good: u8,
    pub needs_work: u8,
}

/// Improvement target; only emitted while `current` sits below `next_tier`.
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    pub key: &'static str,
    pub label: &'static str,
    pub current: u8,
    pub next_tier: u8,
    pub suggested: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Charts {
    pub dimensions: Vec<ChartPoint>,
    pub good_vs_needs_work: Donut,
    pub risk_composition: Vec<ChartPoint>,
    pub percentiles: Vec<ChartPoint>,
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Warn,
    High,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warn => "Warning",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub key: &'static str,
    pub severity: AlertSeverity,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Flags {
    pub risk_flags: Vec<&'static str>,
    pub data_quality: Vec<&'static str>,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub summary_text: String,
    pub strengths: Vec<&'static str>,
    pub improvement_areas: Vec<&'static str>,
    pub persona_tag: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub key: &'static str,
    pub title: &'static str,
    pub why: String,
    pub next_step: &'static str,
    pub priority: u8,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub top_3: Vec<Recommendation>,
    pub all: Vec<Recommendation>,
}

/// Raw internals exposed for troubleshooting dashboards.
#[derive(Debug, Clone, Serialize)]
pub struct DebugBlock {
    pub sub_scores: SubScoreDump,
    pub weights: WeightDump,
    pub notes: Vec<&'static str>,
}

/// The seven weighted subscores, mirrored into the debug block.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubScoreDump {
    pub activity: u8,
    pub sleep: u8,
    pub stress: u8,
    pub hydration: u8,
    pub nutrition: u8,
    pub smoking: u8,
    pub age: u8,
}

/// The fixed weight table, mirrored into the debug block.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeightDump {
    pub activity: u32,
    pub sleep: u32,
    pub stress: u32,
    pub hydration: u32,
    pub nutrition: u32,
    pub smoking: u32,
    pub age: u32,
}

/// The aggregate root: one immutable value per survey submission.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub user: UserInfo,
    pub gauges: Gauges,
    pub scores: Scores,
    pub radar: Vec<RadarPoint>,
    pub charts: Charts,
    pub insight: Insight,
    pub recommendations: Recommendations,
    pub flags: Flags,
    pub debug: DebugBlock,
    pub generated_at: String,
    pub version: &'static str,
}
