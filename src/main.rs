use activity_profile::config::{Cli, Command, ProfileArgs, VisualizeArgs};
use activity_profile::github::GithubClient;
use activity_profile::job::{self, ProfileOutcome};
use activity_profile::utils::StepProgress;
use activity_profile::Result;
use chrono::Utc;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let progress = StepProgress::new(cli.quiet);

    match run(&cli.command, &progress).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: &Command, progress: &StepProgress) -> Result<()> {
    match command {
        Command::Visualize(args) => run_visualize(args, progress),
        Command::UpdateProfile(args) => run_update_profile(args, progress).await,
        Command::All { visualize, profile } => {
            // Secrets are checked before any chart is rendered.
            profile.resolve()?;
            run_visualize(visualize, progress)?;
            run_update_profile(profile, progress).await
        }
    }
}

fn run_visualize(args: &VisualizeArgs, progress: &StepProgress) -> Result<()> {
    let summary = job::visualize(&args.options(), progress)?;
    info!(
        records = summary.records,
        days = summary.analyzed.daily.0.len(),
        projects = summary.analyzed.projects.0.len(),
        quality_days = summary.analyzed.quality.0.len(),
        charts = summary.written.len(),
        "visualization complete"
    );
    Ok(())
}

async fn run_update_profile(args: &ProfileArgs, progress: &StepProgress) -> Result<()> {
    let config = args.resolve()?;
    let client = GithubClient::new(&config.api_url, &config.token)?;
    let today = Utc::now().date_naive();
    let update = job::update_profile(&client, &config.options, today, progress).await?;
    match update.outcome {
        ProfileOutcome::Created { revision } | ProfileOutcome::Updated { revision } => {
            info!(user = %update.username, target = %update.target, %revision, "profile updated")
        }
        ProfileOutcome::Unchanged { .. } => {
            info!(user = %update.username, target = %update.target, "profile already current")
        }
    }
    Ok(())
}
