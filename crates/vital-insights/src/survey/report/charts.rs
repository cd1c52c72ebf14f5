use super::views::{ChartPoint, Gauges, RadarPoint, Target};
use crate::survey::scoring::{self, clamp_score, CoreScores, DerivedScores};

pub(crate) fn radar(core: &CoreScores, derived: &DerivedScores) -> Vec<RadarPoint> {
    vec![
        RadarPoint {
            key: "activity",
            label: "Activity",
            value: core.activity,
        },
        RadarPoint {
            key: "neat",
            label: "Movement (NEAT)",
            value: derived.movement_neat,
        },
        RadarPoint {
            key: "sleep",
            label: "Sleep",
            value: core.sleep,
        },
        RadarPoint {
            key: "stress",
            label: "Stress",
            value: core.stress,
        },
        RadarPoint {
            key: "hydration",
            label: "Hydration",
            value: core.hydration,
        },
        RadarPoint {
            key: "nutrition",
            label: "Nutrition",
            value: core.nutrition,
        },
        RadarPoint {
            key: "habits",
            label: "Habits",
            value: derived.habit_score,
        },
    ]
}

pub(crate) fn dimensions(core: &CoreScores, derived: &DerivedScores) -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            key: "activity",
            label: "Activity",
            value: core.activity,
        },
        ChartPoint {
            key: "sleep",
            label: "Sleep",
            value: core.sleep,
        },
        ChartPoint {
            key: "stress",
            label: "Stress",
            value: core.stress,
        },
        ChartPoint {
            key: "hydration",
            label: "Hydration",
            value: core.hydration,
        },
        ChartPoint {
            key: "nutrition",
            label: "Nutrition",
            value: core.nutrition,
        },
        ChartPoint {
            key: "habits",
            label: "Habits",
            value: derived.habit_score,
        },
    ]
}

/// Raw (un-normalized) risk contributions. The enumeration order matters:
/// `normalize_to_100` pushes all rounding drift into the last entry, so
/// reordering this list shifts the published values.
pub(crate) fn risk_composition(smokes: bool, core: &CoreScores) -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            key: "smoking_risk",
            label: "Smoking",
            value: scoring::smoking_risk(smokes),
        },
        ChartPoint {
            key: "sleep_risk",
            label: "Sleep",
            value: 100 - core.sleep,
        },
        ChartPoint {
            key: "stress_risk",
            label: "Stress",
            value: 100 - core.stress,
        },
        ChartPoint {
            key: "activity_risk",
            label: "Activity",
            value: 100 - core.activity,
        },
        ChartPoint {
            key: "nutrition_risk",
            label: "Nutrition",
            value: 100 - core.nutrition,
        },
    ]
}

/// Rescales the series so the integer percentages sum to exactly 100; the
/// last element absorbs the accumulated rounding error. A zero total comes
/// back unchanged.
pub(crate) fn normalize_to_100(points: Vec<ChartPoint>) -> Vec<ChartPoint> {
    let total: u32 = points.iter().map(|point| u32::from(point.value)).sum();
    if total == 0 {
        return points;
    }

    let count = points.len();
    let mut accumulated: i32 = 0;
    points
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            let pct = if index == count - 1 {
                100 - accumulated
            } else {
                let share =
                    (f64::from(point.value) * 100.0 / f64::from(total)).round() as i32;
                accumulated += share;
                share
            };
            ChartPoint {
                value: pct.clamp(0, 100) as u8,
                ..point
            }
        })
        .collect()
}

/// Heuristic percentile remaps for display; the risk series is inverted so
/// that higher still reads as better.
pub(crate) fn percentiles(gauges: &Gauges) -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            key: "health_pct",
            label: "Health index (percentile)",
            value: clamp_score(f64::from(gauges.health_index) * 0.9 + 10.0),
        },
        ChartPoint {
            key: "activity_pct",
            label: "Activity (percentile)",
            value: clamp_score(f64::from(gauges.activity_score) * 0.95 + 5.0),
        },
        ChartPoint {
            key: "recovery_pct",
            label: "Recovery (percentile)",
            value: clamp_score(f64::from(gauges.recovery_quality) * 0.9 + 10.0),
        },
        ChartPoint {
            key: "balance_pct",
            label: "Balance (percentile)",
            value: clamp_score(f64::from(gauges.lifestyle_balance) * 0.9 + 10.0),
        },
        ChartPoint {
            key: "risk_pct",
            label: "Cardio risk (percentile, lower is better)",
            value: 100 - gauges.cardio_risk,
        },
    ]
}

/// Fixed improvement ladder.
pub(crate) fn next_tier(value: u8) -> u8 {
    if value < 40 {
        55
    } else if value < 55 {
        70
    } else if value < 70 {
        82
    } else {
        90
    }
}

pub(crate) fn targets(
    core: &CoreScores,
    derived: &DerivedScores,
    workouts: u32,
) -> Vec<Target> {
    let mut targets = Vec::new();

    let mut add = |key: &'static str, label: &'static str, current: u8, suggested: &'static str| {
        let tier = next_tier(current);
        if current < tier {
            targets.push(Target {
                key,
                label,
                current,
                next_tier: tier,
                suggested,
            });
        }
    };

    add(
        "sleep",
        "Sleep",
        core.sleep,
        "Add 30 minutes of sleep and fix your wake-up time.",
    );
    add(
        "hydration",
        "Hydration",
        core.hydration,
        "Add 0.5 L per day, gradually.",
    );
    add(
        "nutrition",
        "Nutrition",
        core.nutrition,
        "Cut fast food by one step and anchor one solid meal a day.",
    );

    let activity_suggestion = if workouts >= 3 {
        "Add steps or raise workout intensity."
    } else if workouts >= 1 {
        "Add one or two more workouts per week, or more steps."
    } else {
        "Start with two or three workouts per week, or add steps."
    };
    add("activity", "Activity", core.activity, activity_suggestion);

    add(
        "neat",
        "Movement (NEAT)",
        derived.movement_neat,
        "Set a daily step goal and take two short walks a day.",
    );
    add(
        "habits",
        "Habits",
        derived.habit_score,
        "More water, less fast food and, if it applies, less smoking.",
    );

    // Recovery debt has inverted semantics: lower is better, so the target
    // reports the headroom (100 - debt) against a fixed tier.
    if derived.recovery_debt > 35 {
        targets.push(Target {
            key: "recovery_debt",
            label: "Recovery debt",
            current: 100 - derived.recovery_debt,
            next_tier: 70,
            suggested: "Ease the training load for a week and add sleep and stress relief.",
        });
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(key: &'static str, value: u8) -> ChartPoint {
        ChartPoint {
            key,
            label: "",
            value,
        }
    }

    #[test]
    fn next_tier_follows_the_ladder() {
        assert_eq!(next_tier(0), 55);
        assert_eq!(next_tier(39), 55);
        assert_eq!(next_tier(40), 70);
        assert_eq!(next_tier(54), 70);
        assert_eq!(next_tier(55), 82);
        assert_eq!(next_tier(69), 82);
        assert_eq!(next_tier(70), 90);
        assert_eq!(next_tier(100), 90);
    }

    #[test]
    fn normalization_sums_to_exactly_100() {
        let normalized = normalize_to_100(vec![
            point("a", 10),
            point("b", 1),
            point("c", 40),
            point("d", 38),
            point("e", 20),
        ]);
        let total: u32 = normalized.iter().map(|p| u32::from(p.value)).sum();
        assert_eq!(total, 100);
        // Last element absorbs the drift: 100 - (9 + 1 + 37 + 35).
        assert_eq!(normalized[4].value, 18);
    }

    #[test]
    fn normalization_leaves_zero_series_unchanged() {
        let normalized = normalize_to_100(vec![point("a", 0), point("b", 0)]);
        assert!(normalized.iter().all(|p| p.value == 0));
    }

    #[test]
    fn normalization_keeps_enumeration_order() {
        let normalized = normalize_to_100(vec![point("a", 50), point("b", 25), point("c", 25)]);
        let keys: Vec<&str> = normalized.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(normalized[0].value, 50);
    }

    #[test]
    fn targets_are_suppressed_at_or_above_the_tier() {
        let core = CoreScores {
            activity: 62,
            sleep: 99,
            stress: 60,
            hydration: 88,
            nutrition: 80,
            smoking: 90,
            age: 87,
        };
        let derived = DerivedScores {
            movement_neat: 64,
            recovery_debt: 0,
            nutrition_stability: 80,
            habit_score: 85,
        };
        let targets = targets(&core, &derived, 3);

        // Sleep sits above its tier, recovery debt is under the threshold.
        assert!(targets.iter().all(|t| t.key != "sleep"));
        assert!(targets.iter().all(|t| t.key != "recovery_debt"));
        assert!(targets.iter().all(|t| t.current < t.next_tier));
        let keys: Vec<&str> = targets.iter().map(|t| t.key).collect();
        assert_eq!(
            keys,
            vec!["hydration", "nutrition", "activity", "neat", "habits"]
        );
    }

    #[test]
    fn heavy_debt_emits_the_inverted_target() {
        let core = CoreScores {
            activity: 75,
            sleep: 27,
            stress: 10,
            hydration: 0,
            nutrition: 15,
            smoking: 20,
            age: 55,
        };
        let derived = DerivedScores {
            movement_neat: 80,
            recovery_debt: 85,
            nutrition_stability: 3,
            habit_score: 14,
        };
        let targets = targets(&core, &derived, 0);
        let debt = targets
            .iter()
            .find(|t| t.key == "recovery_debt")
            .expect("debt target present");
        assert_eq!(debt.current, 15);
        assert_eq!(debt.next_tier, 70);
        // Starter hint for zero weekly workouts.
        let activity = targets
            .iter()
            .find(|t| t.key == "activity")
            .expect("activity target present");
        assert!(activity.suggested.starts_with("Start with"));
    }
}
