use crate::demo::{run_demo, run_policy, DemoArgs, PolicyArgs};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use leave_tracker::config::{self, AppConfig};
use leave_tracker::error::AppError;
use leave_tracker::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "leave-tracker",
    about = "Walk through leave requests, balances and approvals from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the case-study walkthrough and print the resulting state as JSON
    Demo(DemoArgs),
    /// Print the standard allotments for a hire date as JSON
    Policy(PolicyArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "leave tracker starting");

    match cli.command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Policy(args) => run_policy(args, &config),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    config::parse_date(raw).map_err(|err| err.to_string())
}
