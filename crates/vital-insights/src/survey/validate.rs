use super::domain::{ActivityLevel, SurveyAnswers};

/// Soft observations about the submitted answers. Nothing here rejects the
/// input; the warnings feed the report's data-quality block and lower the
/// confidence gauge, and the notes are machine tags for the debug block.
#[derive(Debug, Default, Clone)]
pub struct DataQuality {
    pub warnings: Vec<&'static str>,
    pub notes: Vec<&'static str>,
}

pub(crate) fn check(answers: &SurveyAnswers) -> DataQuality {
    let mut quality = DataQuality::default();

    if answers.name.trim().is_empty() {
        quality
            .warnings
            .push("Name is blank; a placeholder will be used.");
    }

    if answers.workouts_per_week == 0
        && matches!(
            answers.activity_level,
            ActivityLevel::High | ActivityLevel::VeryHigh
        )
    {
        quality
            .warnings
            .push("Mismatch: high activity level with 0 workouts per week.");
        quality.notes.push("mismatch.activity_vs_workouts");
    }

    if answers.workouts_per_week >= 6 && answers.activity_level == ActivityLevel::Low {
        quality
            .warnings
            .push("Mismatch: low activity level with 6-7 workouts per week.");
        quality.notes.push("mismatch.activity_low_but_many_workouts");
    }

    if answers.water_liters == 0.0 {
        quality
            .warnings
            .push("Water intake is 0 L; the value may have been skipped.");
        quality.notes.push("water.zero");
    }

    if answers.sleep_hours <= 4.5 {
        quality
            .warnings
            .push("Very low sleep; check that the answer is an average.");
        quality.notes.push("sleep.very_low");
    }

    quality
}
