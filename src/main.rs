use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use driveev_rebate::config::AppConfig;
use driveev_rebate::error::AppError;
use driveev_rebate::server;
use driveev_rebate::workflows::driveev::{
    ApplicationRecord, Clock, EligibilityEvaluator, EligibilityReport, FixedClock,
    PolicyConstants, RebateEligibilityForm, SystemClock,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "driveev-rebate",
    about = "Evaluate DRIVE EV rebate applications from the command line or over HTTP",
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
    /// Evaluate a single application form stored as JSON
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Path to the application form JSON
    #[arg(long)]
    application: PathBuf,
    /// Evaluation date for the filing deadline (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Evaluate(args) => run_evaluate(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    server::run(config, PolicyConstants::default()).await
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        application,
        today,
        json,
    } = args;

    let raw = fs::read_to_string(application)?;
    let form: RebateEligibilityForm = serde_json::from_str(&raw)?;
    let record = ApplicationRecord::try_from_form(form)?;
    let policy = PolicyConstants::default();

    let report = match today {
        Some(today) => {
            EligibilityEvaluator::with_clock(record, &policy, FixedClock(today)).report()
        }
        None => EligibilityEvaluator::with_clock(record, &policy, SystemClock).report(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let today = today.unwrap_or_else(|| SystemClock.today());
        render_report(&report, today);
    }

    Ok(())
}

fn render_report(report: &EligibilityReport, today: NaiveDate) {
    println!("DRIVE EV Rebate Evaluation (as of {today})");
    println!("==========================================");

    if report.eligible {
        println!("Status: eligible");
        println!("Rebate: ${}", report.payable_amount);
        if report.drive_plus_eligible {
            println!("Drive+: income qualifies for the enhanced tier");
        }
    } else {
        println!("Status: not eligible");
        println!("Reasons:");
        for reason in &report.fail_reasons {
            println!("  - {reason}");
        }
        println!("Table rebate (not payable): ${}", report.rebate_amount);
    }

    match report.application_deadline {
        Some(deadline) if report.application_deadline_eligible => {
            println!("Filing deadline: {deadline}");
        }
        Some(deadline) => {
            println!("Filing deadline: {deadline} (passed)");
        }
        None => {}
    }
}
