use super::views::{Alert, AlertSeverity, Flags};
use crate::survey::domain::{FastFoodFrequency, SurveyAnswers};
use crate::survey::scoring::{CoreScores, DerivedScores};
use crate::survey::validate::DataQuality;

/// Builds risk flags and alerts from the raw answers and composite loads.
/// Flags are plain statements; alerts carry a severity and a next action.
pub(crate) fn build(
    answers: &SurveyAnswers,
    core: &CoreScores,
    derived: &DerivedScores,
    metabolic_load: u8,
    cardio_risk: u8,
    quality: &DataQuality,
) -> Flags {
    let mut risk_flags = Vec::new();
    let mut alerts = Vec::new();

    if answers.smokes {
        risk_flags.push("Smoking: lowers endurance and the overall health index.");
        alerts.push(Alert {
            key: "smoking",
            severity: AlertSeverity::High,
            title: "Risk factor: smoking",
            body: "Even cutting down the number of cigarettes improves recovery and cardio risk metrics.",
        });
    }

    if answers.sleep_hours < 6.0 {
        risk_flags.push("Sleep under 6 hours: recovery and energy are likely suffering.");
        alerts.push(Alert {
            key: "sleep_low",
            severity: AlertSeverity::High,
            title: "Critically short sleep",
            body: "Try to add at least 30 minutes of sleep over the coming week.",
        });
    }

    if answers.stress_level >= 8 {
        risk_flags.push("Stress 8-10: risk of burnout and routine breakdowns.");
        alerts.push(Alert {
            key: "stress_high",
            severity: AlertSeverity::Warn,
            title: "High stress",
            body: "Five-minute pauses, walks or breathing twice a day already improve how you feel.",
        });
    }

    if answers.water_liters < 1.2 {
        risk_flags.push("Water under 1.2 L: appetite swings and fatigue are possible.");
        alerts.push(Alert {
            key: "water_low",
            severity: AlertSeverity::Info,
            title: "Low water intake",
            body: "Raise the volume gradually, 0.3 to 0.5 L per day.",
        });
    }

    if matches!(
        answers.fastfood_frequency,
        FastFoodFrequency::Often | FastFoodFrequency::VeryOften
    ) {
        risk_flags.push("Frequent fast food: higher load on the metabolic profile.");
    }

    if derived.recovery_debt >= 60 {
        alerts.push(Alert {
            key: "recovery_debt",
            severity: AlertSeverity::Warn,
            title: "Recovery debt has built up",
            body: "Sleep, stress and training load currently add up to a risk of overtraining or a setback.",
        });
    }

    if cardio_risk >= 65 {
        alerts.push(Alert {
            key: "cardio_risk",
            severity: AlertSeverity::Warn,
            title: "Elevated cardio risk (per questionnaire)",
            body: "This is not a diagnosis. Improve sleep and activity, and see a doctor if you have symptoms.",
        });
    }

    if metabolic_load >= 70 {
        alerts.push(Alert {
            key: "metabolic_load",
            severity: AlertSeverity::Info,
            title: "High metabolic load",
            body: "Most often improved through nutrition (less fast food) and regular movement.",
        });
    }

    // Positive fallback when nothing fired and the basics are solid.
    if alerts.is_empty() && core.sleep >= 75 && core.nutrition >= 70 && core.stress >= 65 {
        alerts.push(Alert {
            key: "green_zone",
            severity: AlertSeverity::Info,
            title: "You are in the green zone",
            body: "The best move now is to lock in your habits and improve metrics one at a time.",
        });
    }

    Flags {
        risk_flags,
        data_quality: quality.warnings.clone(),
        alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::domain::{ActivityLevel, Goal};

    fn answers() -> SurveyAnswers {
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

    fn core(sleep: u8, stress: u8, nutrition: u8) -> CoreScores {
        CoreScores {
            activity: 62,
            sleep,
            stress,
            hydration: 88,
            nutrition,
            smoking: 90,
            age: 87,
        }
    }

    fn derived(recovery_debt: u8) -> DerivedScores {
        DerivedScores {
            movement_neat: 64,
            recovery_debt,
            nutrition_stability: 80,
            habit_score: 85,
        }
    }

    #[test]
    fn quiet_profile_with_moderate_stress_gets_no_alerts() {
        // Stress subscore 60 blocks the green-zone fallback.
        let flags = build(
            &answers(),
            &core(99, 60, 80),
            &derived(0),
            20,
            17,
            &DataQuality::default(),
        );
        assert!(flags.risk_flags.is_empty());
        assert!(flags.alerts.is_empty());
    }

    #[test]
    fn green_zone_fires_only_when_all_basics_hold() {
        let mut relaxed = answers();
        relaxed.stress_level = 3;
        let flags = build(
            &relaxed,
            &core(100, 80, 80),
            &derived(0),
            20,
            17,
            &DataQuality::default(),
        );
        assert_eq!(flags.alerts.len(), 1);
        assert_eq!(flags.alerts[0].key, "green_zone");
        assert_eq!(flags.alerts[0].severity, AlertSeverity::Info);
    }

    #[test]
    fn depleted_profile_raises_every_alert() {
        let depleted = SurveyAnswers {
            name: String::new(),
            age: 80,
            activity_level: ActivityLevel::VeryHigh,
            goal: Goal::FatLoss,
            workouts_per_week: 0,
            sleep_hours: 4.5,
            stress_level: 10,
            water_liters: 0.0,
            fastfood_frequency: FastFoodFrequency::VeryOften,
            smokes: true,
        };
        let flags = build(
            &depleted,
            &core(27, 10, 15),
            &derived(85),
            70,
            70,
            &DataQuality::default(),
        );

        assert_eq!(flags.risk_flags.len(), 5);
        let keys: Vec<&str> = flags.alerts.iter().map(|a| a.key).collect();
        assert_eq!(
            keys,
            vec![
                "smoking",
                "sleep_low",
                "stress_high",
                "water_low",
                "recovery_debt",
                "cardio_risk",
                "metabolic_load",
            ]
        );
    }
}
