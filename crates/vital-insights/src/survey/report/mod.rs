mod charts;
mod flags;
mod gauges;
mod insight;
mod recommend;
mod views;

pub use views::{
    Alert, AlertSeverity, ChartPoint, Charts, DebugBlock, Donut, Flags, Gauges, Insight,
    RadarPoint, Recommendation, Recommendations, Report, Scores, SubScoreDump, Target, UserInfo,
    WeightDump, REPORT_VERSION,
};

use crate::survey::domain::SurveyAnswers;
use crate::survey::scoring::{CoreScores, DerivedScores};
use crate::survey::validate;
use chrono::{DateTime, Utc};

/// Generates the full report for one set of answers. Pure and
/// deterministic: the timestamp is the only outside input, so two calls
/// with the same arguments produce identical reports.
pub fn generate(answers: &SurveyAnswers, generated_at: DateTime<Utc>) -> Report {
    let quality = validate::check(answers);
    let core = CoreScores::from_answers(answers);
    let derived = DerivedScores::compute(answers, &core);
    let gauge_values = gauges::compute(answers, &core, &derived, &quality);

    let good = gauges::donut_good_share(&gauge_values);
    let charts = Charts {
        dimensions: charts::dimensions(&core, &derived),
        good_vs_needs_work: Donut {
            good,
            needs_work: 100 - good,
        },
        risk_composition: charts::normalize_to_100(charts::risk_composition(
            answers.smokes,
            &core,
        )),
        percentiles: charts::percentiles(&gauge_values),
        targets: charts::targets(&core, &derived, answers.workouts_per_week),
    };

    Report {
        user: UserInfo {
            name: answers.display_name().to_owned(),
            age: answers.age,
            goal: answers.goal,
        },
        gauges: gauge_values,
        scores: Scores {
            activity: core.activity,
            sleep: core.sleep,
            stress: core.stress,
            hydration: core.hydration,
            nutrition: core.nutrition,
            smoking: core.smoking,
            age_modifier: core.age,
            movement_neat: derived.movement_neat,
            recovery_debt: derived.recovery_debt,
            nutrition_stability: derived.nutrition_stability,
            habit_score: derived.habit_score,
        },
        radar: charts::radar(&core, &derived),
        charts,
        insight: insight::build(answers, &core, &derived, &gauge_values),
        recommendations: recommend::build(answers, &core, &derived, &gauge_values),
        flags: flags::build(
            answers,
            &core,
            &derived,
            gauge_values.metabolic_load,
            gauge_values.cardio_risk,
            &quality,
        ),
        debug: DebugBlock {
            sub_scores: SubScoreDump {
                activity: core.activity,
                sleep: core.sleep,
                stress: core.stress,
                hydration: core.hydration,
                nutrition: core.nutrition,
                smoking: core.smoking,
                age: core.age,
            },
            weights: gauges::WEIGHTS,
            notes: quality.notes,
        },
        generated_at: generated_at.to_rfc3339(),
        version: REPORT_VERSION,
    }
}
