use super::views::{Gauges, WeightDump};
use crate::survey::domain::SurveyAnswers;
use crate::survey::scoring::{self, clamp_score, CoreScores, DerivedScores};
use crate::survey::validate::DataQuality;

/// Fixed weight table behind the health index. Not tunable at runtime.
pub(crate) const WEIGHTS: WeightDump = WeightDump {
    activity: 20,
    sleep: 20,
    stress: 18,
    hydration: 10,
    nutrition: 18,
    smoking: 10,
    age: 4,
};

pub(crate) fn weighted_average(scores: &CoreScores, weights: &WeightDump) -> u8 {
    let total_weight = weights.activity
        + weights.sleep
        + weights.stress
        + weights.hydration
        + weights.nutrition
        + weights.smoking
        + weights.age;
    if total_weight == 0 {
        return 0;
    }

    let total = u64::from(scores.activity) * u64::from(weights.activity)
        + u64::from(scores.sleep) * u64::from(weights.sleep)
        + u64::from(scores.stress) * u64::from(weights.stress)
        + u64::from(scores.hydration) * u64::from(weights.hydration)
        + u64::from(scores.nutrition) * u64::from(weights.nutrition)
        + u64::from(scores.smoking) * u64::from(weights.smoking)
        + u64::from(scores.age) * u64::from(weights.age);

    clamp_score(total as f64 / f64::from(total_weight))
}

/// Non-monotonic balance lookup: three to four workouts a week recover
/// best, both extremes cost points.
pub(crate) fn balance_for_training_load(workouts: u32) -> u8 {
    match workouts {
        0 => 60,
        1..=2 => 75,
        3..=4 => 90,
        5..=6 => 80,
        _ => 70,
    }
}

/// Computes all ten composite gauges from the subscores. Each gauge is
/// derived exactly once; the assembler never recomputes them.
pub(crate) fn compute(
    answers: &SurveyAnswers,
    core: &CoreScores,
    derived: &DerivedScores,
    quality: &DataQuality,
) -> Gauges {
    let sleep = f64::from(core.sleep);
    let stress = f64::from(core.stress);
    let hydration = f64::from(core.hydration);
    let nutrition = f64::from(core.nutrition);
    let activity = f64::from(core.activity);
    let neat = f64::from(derived.movement_neat);

    let health_index = weighted_average(core, &WEIGHTS);

    let recovery_quality = clamp_score(
        0.55 * sleep
            + 0.30 * stress
            + 0.15 * f64::from(balance_for_training_load(answers.workouts_per_week)),
    );

    let lifestyle_balance = clamp_score(
        0.22 * sleep + 0.22 * stress + 0.20 * nutrition + 0.18 * hydration + 0.18 * neat,
    );

    let energy_index = clamp_score(0.40 * sleep + 0.35 * stress + 0.25 * hydration);

    let metabolic_load = clamp_score(
        0.45 * (100.0 - nutrition)
            + 0.25 * (100.0 - activity)
            + 0.15 * (100.0 - sleep)
            + 0.15 * (100.0 - hydration),
    );

    let cardio_risk = clamp_score(
        0.45 * f64::from(scoring::smoking_risk(answers.smokes))
            + 0.20 * (100.0 - activity)
            + 0.20 * f64::from(scoring::age_risk(answers.age))
            + 0.15 * (100.0 - sleep),
    );

    let consistency = scoring::score_consistency(
        answers.workouts_per_week,
        answers.sleep_hours,
        answers.fastfood_frequency,
        answers.water_liters,
    );

    let readiness = clamp_score(
        0.55 * f64::from(recovery_quality) + 0.45 * f64::from(energy_index)
            - 0.20 * f64::from(cardio_risk)
            - 0.10 * f64::from(metabolic_load),
    );

    Gauges {
        health_index,
        activity_score: core.activity,
        recovery_quality,
        lifestyle_balance,
        energy_index,
        metabolic_load,
        cardio_risk,
        consistency,
        readiness,
        confidence: confidence(answers, quality),
    }
}

/// How trustworthy the output is, given mismatches and extreme answers.
/// Floored at 40: even the worst questionnaire yields a usable report.
fn confidence(answers: &SurveyAnswers, quality: &DataQuality) -> u8 {
    let mut score: i32 = 92;

    if answers.name.trim().is_empty() {
        score -= 2;
    }

    score -= quality.warnings.len() as i32 * 6;

    if answers.sleep_hours <= 4.5 || answers.sleep_hours >= 11.5 {
        score -= 6;
    }
    if answers.water_liters == 0.0 || answers.water_liters >= 4.8 {
        score -= 6;
    }

    score.clamp(40, 100) as u8
}

/// Share of the donut chart credited as "good".
pub(crate) fn donut_good_share(gauges: &Gauges) -> u8 {
    clamp_score(
        0.30 * f64::from(gauges.health_index)
            + 0.20 * f64::from(gauges.recovery_quality)
            + 0.20 * f64::from(gauges.lifestyle_balance)
            + 0.15 * f64::from(gauges.energy_index)
            + 0.15 * f64::from(gauges.consistency),
    )
}
