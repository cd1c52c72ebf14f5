use super::domain::{ActivityLevel, FastFoodFrequency, SurveyAnswers};
use serde::Serialize;

/// Round half away from zero, then clamp to the 0-100 score range.
/// `f64::round` already rounds halves away from zero, which keeps .5 cases
/// reproducible across platforms.
pub(crate) fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// The seven atomic subscores the weighted health index is built from.
/// A fixed-field struct rather than a keyed map: adding a score without
/// wiring it through the weight table becomes a compile error.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct CoreScores {
    pub activity: u8,
    pub sleep: u8,
    pub stress: u8,
    pub hydration: u8,
    pub nutrition: u8,
    pub smoking: u8,
    pub age: u8,
}

impl CoreScores {
    pub(crate) fn from_answers(answers: &SurveyAnswers) -> Self {
        Self {
            activity: score_activity(answers.activity_level, answers.workouts_per_week),
            sleep: score_sleep(answers.sleep_hours),
            stress: score_stress(answers.stress_level),
            hydration: score_hydration(answers.water_liters),
            nutrition: score_nutrition(answers.fastfood_frequency),
            smoking: score_smoking(answers.smokes),
            age: score_age_modifier(answers.age),
        }
    }
}

/// Subscores derived from the answers but excluded from the weighted index.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct DerivedScores {
    pub movement_neat: u8,
    pub recovery_debt: u8,
    pub nutrition_stability: u8,
    pub habit_score: u8,
}

impl DerivedScores {
    pub(crate) fn compute(answers: &SurveyAnswers, core: &CoreScores) -> Self {
        let habit_score = clamp_score(
            0.45 * f64::from(core.nutrition)
                + 0.35 * f64::from(core.smoking)
                + 0.20 * f64::from(core.hydration),
        );

        Self {
            movement_neat: score_neat(answers.activity_level, answers.workouts_per_week),
            recovery_debt: score_recovery_debt(
                answers.sleep_hours,
                answers.stress_level,
                answers.workouts_per_week,
            ),
            nutrition_stability: score_nutrition_stability(
                answers.fastfood_frequency,
                answers.stress_level,
            ),
            habit_score,
        }
    }
}

pub(crate) fn score_activity(level: ActivityLevel, workouts: u32) -> u8 {
    let base = match level {
        ActivityLevel::Low => 25.0,
        ActivityLevel::Medium => 50.0,
        ActivityLevel::High => 70.0,
        ActivityLevel::VeryHigh => 85.0,
    };
    let bonus = (f64::from(workouts) * 4.0).clamp(0.0, 28.0);

    let mut mismatch = 0.0;
    if matches!(level, ActivityLevel::High | ActivityLevel::VeryHigh) && workouts <= 1 {
        mismatch += 10.0;
    }
    if level == ActivityLevel::Low && workouts >= 5 {
        mismatch += 6.0;
    }

    clamp_score(base + bonus - mismatch)
}

/// Proxy for everyday movement outside scheduled workouts (NEAT).
pub(crate) fn score_neat(level: ActivityLevel, workouts: u32) -> u8 {
    let base = match level {
        ActivityLevel::Low => 30.0,
        ActivityLevel::Medium => 55.0,
        ActivityLevel::High => 70.0,
        ActivityLevel::VeryHigh => 80.0,
    };
    let bonus = (f64::from(workouts) * 3.0).clamp(0.0, 18.0);
    clamp_score(base + bonus)
}

/// Quadratic penalty around the 8-hour optimum.
pub(crate) fn score_sleep(hours: f64) -> u8 {
    let diff = hours - 8.0;
    clamp_score(100.0 - diff * diff * 6.0)
}

/// Stress level 1 maps to 100, level 10 to 10.
pub(crate) fn score_stress(stress: u32) -> u8 {
    clamp_score(110.0 - f64::from(stress) * 10.0)
}

/// 2.5 L/day saturates the score.
pub(crate) fn score_hydration(liters: f64) -> u8 {
    if liters <= 0.0 {
        return 0;
    }
    clamp_score(40.0 + liters * 24.0)
}

pub(crate) fn score_nutrition(frequency: FastFoodFrequency) -> u8 {
    match frequency {
        FastFoodFrequency::Never => 95,
        FastFoodFrequency::Rarely => 80,
        FastFoodFrequency::Sometimes => 60,
        FastFoodFrequency::Often => 35,
        FastFoodFrequency::VeryOften => 15,
    }
}

/// Stress destabilizes food choices, so high stress discounts nutrition.
pub(crate) fn score_nutrition_stability(frequency: FastFoodFrequency, stress: u32) -> u8 {
    let base = f64::from(score_nutrition(frequency));
    let penalty = if stress >= 8 {
        12.0
    } else if stress >= 6 {
        6.0
    } else {
        0.0
    };
    clamp_score(base - penalty)
}

pub(crate) fn score_smoking(smokes: bool) -> u8 {
    if smokes {
        20
    } else {
        90
    }
}

/// Linear slide from 95 at age 18 down to 55 at age 80. Heuristic only.
pub(crate) fn score_age_modifier(age: u32) -> u8 {
    let t = (f64::from(age) - 18.0) / 62.0;
    clamp_score(95.0 - t * 40.0)
}

/// Accumulated fatigue estimate; higher is worse. Sleep shortfall below
/// seven hours, stress above five, and a fifth-plus weekly workout all add
/// to the debt.
pub(crate) fn score_recovery_debt(sleep: f64, stress: u32, workouts: u32) -> u8 {
    let mut debt = 0.0;

    if sleep < 7.0 {
        debt += (7.0 - sleep) * 18.0;
    }

    debt += f64::from(stress.saturating_sub(5)) * 8.0;

    if workouts >= 5 {
        debt += f64::from(workouts - 4) * 7.0;
    }

    clamp_score(debt)
}

/// How repeatable the overall lifestyle looks, band adjustments around a
/// base of 60.
pub(crate) fn score_consistency(
    workouts: u32,
    sleep: f64,
    frequency: FastFoodFrequency,
    water: f64,
) -> u8 {
    let mut score: i32 = 60;

    score += match workouts {
        0 => -10,
        1 => -5,
        2..=4 => 10,
        _ => 6,
    };

    if (7.0..=9.0).contains(&sleep) {
        score += 12;
    } else if sleep < 6.0 {
        score -= 12;
    } else {
        score -= 4;
    }

    score += match frequency {
        FastFoodFrequency::Often | FastFoodFrequency::VeryOften => -10,
        FastFoodFrequency::Never | FastFoodFrequency::Rarely => 6,
        FastFoodFrequency::Sometimes => 0,
    };

    if water >= 1.8 {
        score += 6;
    } else if water < 1.0 {
        score -= 8;
    }

    score.clamp(0, 100) as u8
}

/// Smoking expressed as a risk value for the cardio composite and the risk
/// composition chart.
pub(crate) fn smoking_risk(smokes: bool) -> u8 {
    if smokes {
        90
    } else {
        10
    }
}

/// Age expressed as a risk value: 10 at 18, 70 at 80. Heuristic only.
pub(crate) fn age_risk(age: u32) -> u8 {
    let t = (f64::from(age) - 18.0) / 62.0;
    clamp_score(10.0 + t * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_peaks_at_eight_hours() {
        assert_eq!(score_sleep(8.0), 100);
        assert_eq!(score_sleep(7.0), 94);
        assert_eq!(score_sleep(12.0), 4);
    }

    #[test]
    fn sleep_half_point_rounds_away_from_zero() {
        // 100 - 6 * 3.5^2 = 26.5, pinned to 27 by the rounding policy.
        assert_eq!(score_sleep(4.5), 27);
    }

    #[test]
    fn sleep_never_underflows_for_extreme_input() {
        assert_eq!(score_sleep(0.0), 0);
        assert_eq!(score_sleep(24.0), 0);
    }

    #[test]
    fn stress_spans_the_documented_range() {
        assert_eq!(score_stress(1), 100);
        assert_eq!(score_stress(10), 10);
    }

    #[test]
    fn hydration_is_zero_without_water() {
        assert_eq!(score_hydration(0.0), 0);
        assert_eq!(score_hydration(2.5), 100);
        assert_eq!(score_hydration(2.0), 88);
    }

    #[test]
    fn age_modifier_endpoints() {
        assert_eq!(score_age_modifier(18), 95);
        assert_eq!(score_age_modifier(80), 55);
    }

    #[test]
    fn age_risk_endpoints() {
        assert_eq!(age_risk(18), 10);
        assert_eq!(age_risk(80), 70);
    }

    #[test]
    fn activity_mismatch_penalties_apply() {
        // Very high level with no workouts: 85 + 0 - 10.
        assert_eq!(score_activity(ActivityLevel::VeryHigh, 0), 75);
        // Low level with daily workouts: 25 + 28 - 6 (bonus capped at 28).
        assert_eq!(score_activity(ActivityLevel::Low, 7), 47);
        assert_eq!(score_activity(ActivityLevel::Medium, 3), 62);
    }

    #[test]
    fn neat_bonus_is_capped() {
        assert_eq!(score_neat(ActivityLevel::Medium, 3), 64);
        assert_eq!(score_neat(ActivityLevel::VeryHigh, 7), 98);
    }

    #[test]
    fn recovery_debt_accumulates_from_all_three_sources() {
        assert_eq!(score_recovery_debt(7.5, 5, 3), 0);
        // (7 - 4.5) * 18 + (10 - 5) * 8 = 45 + 40.
        assert_eq!(score_recovery_debt(4.5, 10, 0), 85);
        // Training load kicks in at the fifth workout.
        assert_eq!(score_recovery_debt(8.0, 5, 5), 7);
        assert_eq!(score_recovery_debt(8.0, 5, 4), 0);
    }

    #[test]
    fn nutrition_stability_discounts_under_stress() {
        assert_eq!(
            score_nutrition_stability(FastFoodFrequency::Rarely, 5),
            80
        );
        assert_eq!(score_nutrition_stability(FastFoodFrequency::Rarely, 6), 74);
        assert_eq!(score_nutrition_stability(FastFoodFrequency::Rarely, 8), 68);
    }

    #[test]
    fn consistency_bands_add_up() {
        // 60 + 10 (workouts 2-4) + 12 (sleep 7-9) + 6 (rarely) + 6 (water).
        assert_eq!(
            score_consistency(3, 7.5, FastFoodFrequency::Rarely, 2.0),
            94
        );
        // 60 - 10 - 12 - 10 - 8.
        assert_eq!(
            score_consistency(0, 4.5, FastFoodFrequency::VeryOften, 0.0),
            20
        );
    }
}
