use crate::analyze::{run_analyze, AnalyzeArgs};
use crate::demo::run_demo;
use crate::render::{render_feed, render_lab, render_launch};
use crate::session::run_session;
use afrowurldstar::config::AppConfig;
use afrowurldstar::error::AppError;
use afrowurldstar::lab::clearance::SampleClearanceQuestionnaire;
use afrowurldstar::lab::LabToolId;
use afrowurldstar::navigation::{Navigator, View};
use afrowurldstar::telemetry;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "AFROWURLDSTAR",
    about = "Culture, Commerce, Code. Browse the culture feed and run the producer lab from the terminal",
    version
)]
struct Cli {
    /// Override the configured log level/filter
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the culture feed and gist (default when APP_START_VIEW=feed)
    Feed,
    /// List the producer and artist tools in the lab
    Lab {
        #[command(subcommand)]
        command: Option<LabCommand>,
    },
    /// Score a sample from answers given on the command line
    Analyze(AnalyzeArgs),
    /// Walk through the clearance questionnaire one question at a time
    Session,
    /// Run a scripted tour: feed, lab, a full analysis, a re-answer and a reset
    Demo,
}

#[derive(Subcommand, Debug)]
enum LabCommand {
    /// Press a tool's launch button
    Launch {
        /// Tool key (hook-timeline, vocal-analyzer, sample-clearance)
        tool: LabToolId,
    },
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }

    telemetry::init(&config.telemetry)?;

    let navigator = Navigator::new(config.ui.start_view);
    info!(?config.environment, view = ?navigator.current(), "afrowurldstar ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let command = cli.command.unwrap_or(match navigator.current() {
        View::Feed => Command::Feed,
        View::Lab => Command::Lab { command: None },
    });

    match command {
        Command::Feed => render_feed(&mut out, Utc::now())?,
        Command::Lab { command: None } => render_lab(&mut out)?,
        Command::Lab {
            command: Some(LabCommand::Launch { tool }),
        } => {
            if render_launch(&mut out, tool)? {
                let stdin = io::stdin();
                let mut session = SampleClearanceQuestionnaire::default();
                run_session(stdin.lock(), &mut out, &mut session)?;
            }
        }
        Command::Analyze(args) => run_analyze(&mut out, args)?,
        Command::Session => {
            let stdin = io::stdin();
            let mut session = SampleClearanceQuestionnaire::default();
            run_session(stdin.lock(), &mut out, &mut session)?;
        }
        Command::Demo => run_demo(&mut out, Utc::now())?,
    }

    out.flush()?;
    Ok(())
}
