use super::views::{Gauges, Insight};
use crate::survey::domain::{Goal, SurveyAnswers};
use crate::survey::scoring::{CoreScores, DerivedScores};

const STRENGTH_THRESHOLD: u8 = 72;
const IMPROVEMENT_THRESHOLD: u8 = 58;

/// Builds the narrative block: strengths, growth areas, persona and the
/// one-paragraph summary.
pub(crate) fn build(
    answers: &SurveyAnswers,
    core: &CoreScores,
    derived: &DerivedScores,
    gauges: &Gauges,
) -> Insight {
    let (strengths, improvement_areas) = strengths_and_improvements(answers, core, derived);
    let persona_tag = persona(
        gauges.health_index,
        gauges.consistency,
        gauges.cardio_risk,
        derived.recovery_debt,
    );
    let summary_text = summary(
        answers.display_name(),
        gauges,
        &strengths,
        &improvement_areas,
    );

    Insight {
        summary_text,
        strengths,
        improvement_areas,
        persona_tag,
    }
}

/// One line per lifestyle dimension, phrased both ways. The three highest
/// scores become strengths when they clear 72, the three lowest become
/// growth areas when they fall to 58 or below.
fn strengths_and_improvements(
    answers: &SurveyAnswers,
    core: &CoreScores,
    derived: &DerivedScores,
) -> (Vec<&'static str>, Vec<&'static str>) {
    let items: [(u8, &'static str, &'static str); 6] = [
        (
            core.sleep,
            "Sleep is close to optimal, which speeds up recovery.",
            "Fix your sleep; aim for about 7-8 hours on average.",
        ),
        (
            core.stress,
            "Stress is under control, which makes it easier to keep a routine and progress.",
            "Lower your stress; it directly affects recovery and eating habits.",
        ),
        (
            core.activity,
            "Good activity is a strong base for fitness and health.",
            "Make movement regular: two or three workouts a week or more steps will pay off quickly.",
        ),
        (
            derived.movement_neat,
            "A decent level of everyday movement (NEAT).",
            "Increase everyday movement; walks and steps are the easiest lever.",
        ),
        (
            derived.habit_score,
            "Your habits broadly support your health.",
            "Improve your habits: water, fast food and smoking move the index the most.",
        ),
        (
            derived.nutrition_stability,
            "Nutrition looks reasonably stable.",
            "Stabilize your nutrition: start with one anchor meal a day.",
        ),
    ];

    let mut strengths = Vec::new();
    let mut by_value = items;
    by_value.sort_by(|a, b| b.0.cmp(&a.0));
    for (value, high, _) in by_value.iter().take(3) {
        if *value >= STRENGTH_THRESHOLD {
            strengths.push(*high);
        }
    }

    let mut improvements = Vec::new();
    by_value.sort_by_key(|item| item.0);
    for (value, _, low) in by_value.iter().take(3) {
        if *value <= IMPROVEMENT_THRESHOLD {
            improvements.push(*low);
        }
    }

    if derived.recovery_debt >= 60 {
        push_unique(
            &mut improvements,
            "Close the recovery debt first (sleep, stress, load), then push for progress.",
        );
    }

    let goal_hint = match answers.goal {
        Goal::FatLoss => "For fat loss the key is stability: sleep, nutrition and steps.",
        Goal::MassGain => "For mass gain: three strength sessions a week and recovery first.",
        Goal::Maintain => "For maintenance, keeping habits is more important than training perfectly.",
        Goal::Health => "For overall health, sleep, water and movement are the fastest levers.",
    };
    push_unique(&mut improvements, goal_hint);

    (strengths, improvements)
}

fn push_unique(items: &mut Vec<&'static str>, item: &'static str) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// First matching rule wins, so the ordering encodes severity.
fn persona(health: u8, consistency: u8, cardio_risk: u8, recovery_debt: u8) -> &'static str {
    if health >= 80 && consistency >= 75 && cardio_risk < 40 {
        "stable progressor"
    } else if recovery_debt >= 60 {
        "accumulating fatigue"
    } else if cardio_risk >= 65 {
        "needs risk reduction"
    } else if consistency < 55 {
        "needs a simple routine"
    } else {
        "moderate balance"
    }
}

fn summary(
    name: &str,
    gauges: &Gauges,
    strengths: &[&'static str],
    improvements: &[&'static str],
) -> String {
    let mut text = format!(
        "Hi, {name}! Health index {}/100; readiness {}/100; calculation confidence {}/100. ",
        gauges.health_index, gauges.readiness, gauges.confidence,
    );

    if let Some(first) = strengths.first() {
        text.push_str(&format!("Strength: {} ", trim_sentence(first)));
    }

    match improvements.first() {
        Some(first) => text.push_str(&format!("Growth area: {}", trim_sentence(first))),
        None => text.push_str("Your numbers are even; improve in small, targeted steps."),
    }

    text
}

/// Normalizes a list item into sentence position: trimmed, exactly one
/// trailing period.
fn trim_sentence(s: &str) -> String {
    format!("{}.", s.trim().trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::domain::{ActivityLevel, FastFoodFrequency};

    fn balanced_answers() -> SurveyAnswers {
        SurveyAnswers {
            name: "Ivan".to_owned(),
            age: 30,
            activity_level: ActivityLevel::Medium,
            goal: Goal::Health,
            workouts_per_week: 3,
            sleep_hours: 7.5,
            stress_level: 5,
            water_liters: 2.0,
            fastfood_frequency: FastFoodFrequency::Rarely,
            smokes: false,
        }
    }

    fn balanced_core() -> CoreScores {
        CoreScores {
            activity: 62,
            sleep: 99,
            stress: 60,
            hydration: 88,
            nutrition: 80,
            smoking: 90,
            age: 87,
        }
    }

    fn balanced_derived() -> DerivedScores {
        DerivedScores {
            movement_neat: 64,
            recovery_debt: 0,
            nutrition_stability: 80,
            habit_score: 85,
        }
    }

    #[test]
    fn balanced_profile_collects_three_strengths() {
        let (strengths, improvements) = strengths_and_improvements(
            &balanced_answers(),
            &balanced_core(),
            &balanced_derived(),
        );

        assert_eq!(strengths.len(), 3);
        assert!(strengths[0].starts_with("Sleep"));
        assert!(strengths[1].starts_with("Your habits"));
        assert!(strengths[2].starts_with("Nutrition"));

        // Nothing at or below the growth threshold, only the goal hint.
        assert_eq!(improvements.len(), 1);
        assert!(improvements[0].starts_with("For overall health"));
    }

    #[test]
    fn depleted_profile_calls_out_the_debt_once() {
        let mut answers = balanced_answers();
        answers.goal = Goal::FatLoss;
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

        let (strengths, improvements) = strengths_and_improvements(&answers, &core, &derived);

        assert_eq!(strengths.len(), 2);
        assert!(strengths[0].starts_with("A decent level"));
        assert!(strengths[1].starts_with("Good activity"));

        assert_eq!(improvements.len(), 5);
        assert!(improvements[0].starts_with("Stabilize"));
        assert!(improvements[1].starts_with("Lower your stress"));
        assert!(improvements[2].starts_with("Improve your habits"));
        assert!(improvements[3].starts_with("Close the recovery debt"));
        assert!(improvements[4].starts_with("For fat loss"));
    }

    #[test]
    fn persona_rules_fire_in_order() {
        assert_eq!(persona(85, 80, 20, 0), "stable progressor");
        assert_eq!(persona(85, 80, 20, 60), "accumulating fatigue");
        assert_eq!(persona(50, 80, 70, 0), "needs risk reduction");
        assert_eq!(persona(50, 40, 20, 0), "needs a simple routine");
        assert_eq!(persona(79, 94, 17, 0), "moderate balance");
    }

    #[test]
    fn summary_mentions_the_three_headline_gauges() {
        let gauges = Gauges {
            health_index: 79,
            activity_score: 62,
            recovery_quality: 86,
            lifestyle_balance: 78,
            energy_index: 83,
            metabolic_load: 20,
            cardio_risk: 17,
            consistency: 94,
            readiness: 79,
            confidence: 92,
        };
        let text = summary("Ivan", &gauges, &["Sleep is close to optimal"], &[]);
        assert!(text.starts_with("Hi, Ivan! Health index 79/100; readiness 79/100;"));
        assert!(text.contains("Strength: Sleep is close to optimal."));
        assert!(text.ends_with("Your numbers are even; improve in small, targeted steps."));
    }

    #[test]
    fn trim_sentence_keeps_exactly_one_period() {
        assert_eq!(trim_sentence("do the thing.."), "do the thing.");
        assert_eq!(trim_sentence("  do the thing  "), "do the thing.");
    }
}
