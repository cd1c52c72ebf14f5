use crate::demo::{run_survey_report, SurveyReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vital_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vital Insights",
    about = "Run the lifestyle survey insights service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with survey reports without starting the server
    Survey {
        #[command(subcommand)]
        command: SurveyCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SurveyCommand {
    /// Generate and print a full health report for one set of answers
    Report(SurveyReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Survey {
            command: SurveyCommand::Report(args),
        } => run_survey_report(args),
    }
}
