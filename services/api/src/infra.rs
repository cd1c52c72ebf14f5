use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use vital_insights::survey::{
    ActivityLevel, FastFoodFrequency, Goal, Report, StoreError, SurveyAnswers, SurveyId,
    SurveyRecord, SurveyStore,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySurveyStore {
    records: Arc<Mutex<HashMap<SurveyId, SurveyRecord>>>,
}

impl SurveyStore for InMemorySurveyStore {
    fn save(&self, answers: SurveyAnswers, report: Report) -> Result<SurveyRecord, StoreError> {
        let record = SurveyRecord {
            id: SurveyId(Uuid::new_v4().to_string()),
            answers,
            report,
            created_at: Utc::now(),
        };
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SurveyId) -> Result<Option<SurveyRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Hard input bounds. The engine itself tolerates anything, but answers
/// outside these ranges are rejected at the boundary with a 422.
pub(crate) fn range_violations(answers: &SurveyAnswers) -> Vec<String> {
    let mut violations = Vec::new();

    let name = answers.name.trim();
    if name.is_empty() {
        violations.push("name must not be blank".to_owned());
    } else if name.chars().count() > 100 {
        violations.push("name must be at most 100 characters".to_owned());
    }

    if !(18..=80).contains(&answers.age) {
        violations.push(format!("age must be between 18 and 80, got {}", answers.age));
    }

    if answers.workouts_per_week > 7 {
        violations.push(format!(
            "workouts_per_week must be between 0 and 7, got {}",
            answers.workouts_per_week
        ));
    }

    if !(4.0..=12.0).contains(&answers.sleep_hours) {
        violations.push(format!(
            "sleep_hours must be between 4 and 12, got {}",
            answers.sleep_hours
        ));
    }

    if !(1..=10).contains(&answers.stress_level) {
        violations.push(format!(
            "stress_level must be between 1 and 10, got {}",
            answers.stress_level
        ));
    }

    if !(0.0..=5.0).contains(&answers.water_liters) {
        violations.push(format!(
            "water_liters must be between 0 and 5, got {}",
            answers.water_liters
        ));
    }

    violations
}

pub(crate) fn parse_activity_level(raw: &str) -> Result<ActivityLevel, String> {
    match raw.trim() {
        "low" => Ok(ActivityLevel::Low),
        "medium" => Ok(ActivityLevel::Medium),
        "high" => Ok(ActivityLevel::High),
        "very_high" => Ok(ActivityLevel::VeryHigh),
        other => Err(format!(
            "unknown activity level '{other}' (expected low, medium, high or very_high)"
        )),
    }
}

pub(crate) fn parse_goal(raw: &str) -> Result<Goal, String> {
    match raw.trim() {
        "fat_loss" => Ok(Goal::FatLoss),
        "mass_gain" => Ok(Goal::MassGain),
        "maintain" => Ok(Goal::Maintain),
        "health" => Ok(Goal::Health),
        other => Err(format!(
            "unknown goal '{other}' (expected fat_loss, mass_gain, maintain or health)"
        )),
    }
}

pub(crate) fn parse_fastfood_frequency(raw: &str) -> Result<FastFoodFrequency, String> {
    match raw.trim() {
        "never" => Ok(FastFoodFrequency::Never),
        "rarely" => Ok(FastFoodFrequency::Rarely),
        "sometimes" => Ok(FastFoodFrequency::Sometimes),
        "often" => Ok(FastFoodFrequency::Often),
        "very_often" => Ok(FastFoodFrequency::VeryOften),
        other => Err(format!(
            "unknown fast food frequency '{other}' (expected never, rarely, sometimes, often or very_often)"
        )),
    }
}
