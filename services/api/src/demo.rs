use crate::infra::{parse_activity_level, parse_fastfood_frequency, parse_goal, range_violations};
use chrono::Utc;
use clap::Args;
use vital_insights::error::AppError;
use vital_insights::survey::{
    generate, ActivityLevel, FastFoodFrequency, Goal, Report, SurveyAnswers,
};

#[derive(Args, Debug)]
pub(crate) struct SurveyReportArgs {
    /// Respondent name
    #[arg(long)]
    pub(crate) name: String,
    /// Age in years (18-80)
    #[arg(long)]
    pub(crate) age: u32,
    /// Activity level: low, medium, high or very_high
    #[arg(long, value_parser = parse_activity_level)]
    pub(crate) activity_level: ActivityLevel,
    /// Goal: fat_loss, mass_gain, maintain or health
    #[arg(long, value_parser = parse_goal)]
    pub(crate) goal: Goal,
    /// Workouts per week (0-7)
    #[arg(long)]
    pub(crate) workouts_per_week: u32,
    /// Average sleep hours (4-12)
    #[arg(long)]
    pub(crate) sleep_hours: f64,
    /// Stress level (1-10)
    #[arg(long)]
    pub(crate) stress_level: u32,
    /// Daily water intake in liters (0-5)
    #[arg(long)]
    pub(crate) water_liters: f64,
    /// Fast food frequency: never, rarely, sometimes, often or very_often
    #[arg(long, value_parser = parse_fastfood_frequency)]
    pub(crate) fastfood_frequency: FastFoodFrequency,
    /// Whether the respondent smokes
    #[arg(long)]
    pub(crate) smokes: bool,
}

pub(crate) fn run_survey_report(args: SurveyReportArgs) -> Result<(), AppError> {
    let answers = SurveyAnswers {
        name: args.name,
        age: args.age,
        activity_level: args.activity_level,
        goal: args.goal,
        workouts_per_week: args.workouts_per_week,
        sleep_hours: args.sleep_hours,
        stress_level: args.stress_level,
        water_liters: args.water_liters,
        fastfood_frequency: args.fastfood_frequency,
        smokes: args.smokes,
    };

    for violation in range_violations(&answers) {
        println!("warning: {violation}");
    }

    let report = generate(&answers, Utc::now());
    render_report(&answers, &report);
    Ok(())
}

fn render_report(answers: &SurveyAnswers, report: &Report) {
    println!(
        "Health report for {} (age {}, goal: {})",
        report.user.name,
        report.user.age,
        answers.goal.label()
    );
    println!("Generated at {} ({})", report.generated_at, report.version);

    println!("\n{}", report.insight.summary_text);
    println!("Persona: {}", report.insight.persona_tag);

    println!("\nGauges");
    println!("  health index      {:>3}/100", report.gauges.health_index);
    println!("  readiness         {:>3}/100", report.gauges.readiness);
    println!("  recovery quality  {:>3}/100", report.gauges.recovery_quality);
    println!("  lifestyle balance {:>3}/100", report.gauges.lifestyle_balance);
    println!("  energy index      {:>3}/100", report.gauges.energy_index);
    println!("  consistency       {:>3}/100", report.gauges.consistency);
    println!("  metabolic load    {:>3}/100", report.gauges.metabolic_load);
    println!("  cardio risk       {:>3}/100", report.gauges.cardio_risk);
    println!("  confidence        {:>3}/100", report.gauges.confidence);

    println!("\nLifestyle dimensions");
    for point in &report.radar {
        println!("  {:<16} {:>3}/100", point.label, point.value);
    }

    if !report.insight.strengths.is_empty() {
        println!("\nStrengths");
        for line in &report.insight.strengths {
            println!("  - {line}");
        }
    }

    if !report.insight.improvement_areas.is_empty() {
        println!("\nGrowth areas");
        for line in &report.insight.improvement_areas {
            println!("  - {line}");
        }
    }

    if !report.charts.targets.is_empty() {
        println!("\nTargets");
        for target in &report.charts.targets {
            println!(
                "  {:<16} {:>3} -> {:<3} {}",
                target.label, target.current, target.next_tier, target.suggested
            );
        }
    }

    if !report.recommendations.all.is_empty() {
        println!("\nRecommendations");
        for rec in &report.recommendations.all {
            println!("  [{:>2}] {} ({})", rec.priority, rec.title, rec.category);
            println!("       {}", rec.why);
            println!("       Next step: {}", rec.next_step);
        }
    }

    if !report.flags.alerts.is_empty() {
        println!("\nAlerts");
        for alert in &report.flags.alerts {
            println!("  [{}] {}: {}", alert.severity.label(), alert.title, alert.body);
        }
    }

    if !report.flags.data_quality.is_empty() {
        println!("\nData quality");
        for warning in &report.flags.data_quality {
            println!("  - {warning}");
        }
    }
}
