use super::views::{Gauges, Recommendation, Recommendations};
use crate::survey::domain::{FastFoodFrequency, Goal, SurveyAnswers};
use crate::survey::scoring::{CoreScores, DerivedScores};

/// Builds the full recommendation list, sorted by priority, plus the top
/// three picks the dashboard leads with.
pub(crate) fn build(
    answers: &SurveyAnswers,
    core: &CoreScores,
    derived: &DerivedScores,
    gauges: &Gauges,
) -> Recommendations {
    let mut recs = Vec::new();

    if core.sleep < 80 {
        recs.push(Recommendation {
            key: "sleep_upgrade",
            title: "Improve sleep (the first lever)",
            why: format!(
                "Sleep {}/100; it has the strongest effect on recovery and energy.",
                core.sleep
            ),
            next_step: "Seven-day plan: a fixed wake-up time plus no screens 45 minutes before bed.",
            priority: 88,
            category: "sleep",
        });
    }

    if core.stress < 60 || answers.stress_level >= 7 {
        recs.push(Recommendation {
            key: "stress_protocol",
            title: "Stress reduction protocol",
            why: "Stress directly degrades recovery quality and makes routine breakdowns more likely."
                .to_owned(),
            next_step: "Twice a day for 5 minutes: a walk or breathing, plus one screen-free slot in the evening.",
            priority: 82,
            category: "stress",
        });
    }

    if core.hydration < 70 {
        recs.push(Recommendation {
            key: "water_routine",
            title: "Make water an automatic habit",
            why: format!(
                "Hydration {}/100; this is a simple and fast upgrade to how you feel.",
                core.hydration
            ),
            next_step: "Put a 0.5 L bottle on your desk and finish two of them before 4 pm.",
            priority: 62,
            category: "hydration",
        });
    }

    if core.nutrition < 70 {
        recs.push(Recommendation {
            key: "nutrition_anchor",
            title: "An anchor meal",
            why: "One stable meal a day sharply improves the overall diet without willpower."
                .to_owned(),
            next_step: "Daily: protein plus vegetables plus complex carbs (or fruit) in a single meal.",
            priority: 74,
            category: "nutrition",
        });
    }

    if matches!(
        answers.fastfood_frequency,
        FastFoodFrequency::Often | FastFoodFrequency::VeryOften
    ) {
        recs.push(Recommendation {
            key: "fastfood_stepdown",
            title: "Step fast food down one notch",
            why: "Frequent fast food raises the metabolic load.".to_owned(),
            next_step: "For the next 14 days, swap one fast-food meal for a bowl, soup or salad with protein.",
            priority: 79,
            category: "nutrition",
        });
    }

    if answers.smokes {
        recs.push(Recommendation {
            key: "smoking_reduce",
            title: "Cut down on smoking",
            why: format!(
                "Cardio risk {}/100 is partly shaped by habits.",
                gauges.cardio_risk
            ),
            next_step: "Pick one step: one cigarette less per day, or smoke-free windows until noon.",
            priority: 92,
            category: "habits",
        });
    }

    if answers.workouts_per_week <= 1 {
        recs.push(Recommendation {
            key: "workouts_2x",
            title: "The effective minimum: 2 workouts a week",
            why: "With two workouts a week progress becomes predictable.".to_owned(),
            next_step: "Twice a week for 35-45 minutes: basic full-body work plus walks on the other days.",
            priority: 77,
            category: "activity",
        });
    } else if answers.workouts_per_week >= 6
        && (derived.recovery_debt >= 55 || answers.sleep_hours < 7.0 || answers.stress_level >= 7)
    {
        recs.push(Recommendation {
            key: "deload_week",
            title: "A deload week",
            why: "Heavy training on top of poor sleep or stress tends to accumulate recovery debt."
                .to_owned(),
            next_step: "Swap one or two sessions for light activity: 30-45 minutes of walking or mobility work.",
            priority: 73,
            category: "recovery",
        });
    }

    match answers.goal {
        Goal::FatLoss => {
            if answers.workouts_per_week >= 4 {
                recs.push(Recommendation {
                    key: "steps_goal",
                    title: "Add low-intensity cardio",
                    why: "With frequent workouts, steps and walks burn calories without overloading recovery."
                        .to_owned(),
                    next_step: "Add 20-30 minutes of walking on rest days or after strength sessions.",
                    priority: 58,
                    category: "activity",
                });
            } else {
                recs.push(Recommendation {
                    key: "steps_goal",
                    title: "Add steps",
                    why: "Steps raise energy expenditure without taxing recovery much.".to_owned(),
                    next_step: "Ten-day goal: 2000 steps on top of your current level (or 7000-9000 a day).",
                    priority: 58,
                    category: "activity",
                });
            }
        }
        Goal::MassGain => {
            if answers.workouts_per_week >= 3 {
                recs.push(Recommendation {
                    key: "strength_plan",
                    title: "Progressive overload",
                    why: "Mass gain needs progression: increase weights and volume gradually.".to_owned(),
                    next_step: "Keep a training log: record weights and reps, add a little each week.",
                    priority: 60,
                    category: "activity",
                });
            } else {
                recs.push(Recommendation {
                    key: "strength_plan",
                    title: "A strength plan with progression",
                    why: "Mass gain needs at least three strength sessions a week.".to_owned(),
                    next_step: "Three times a week: press, pull and squat variations, tracking weights and reps.",
                    priority: 60,
                    category: "activity",
                });
            }
        }
        Goal::Maintain | Goal::Health => {}
    }

    if gauges.confidence < 70 {
        recs.push(Recommendation {
            key: "data_check",
            title: "Double-check the questionnaire",
            why: "Mismatched or extreme answers lower the accuracy of these recommendations."
                .to_owned(),
            next_step: "Review sleep, water and workouts and resubmit; the dashboard will get sharper.",
            priority: 50,
            category: "meta",
        });
    }

    // Stable sort keeps rule order among equal priorities.
    recs.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut seen = Vec::new();
    recs.retain(|rec| {
        if seen.contains(&rec.key) {
            false
        } else {
            seen.push(rec.key);
            true
        }
    });

    let top_3 = recs.iter().take(3).cloned().collect();
    Recommendations { top_3, all: recs }
}
