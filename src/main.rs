//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: Workspace Git Client, Consoles, Notifier
//! - Application: Coordinator, Reporter
//! - Interface: Command Handlers

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::application::coordinator::{StagePhase, StagingCoordinator};
use crate::application::reporter::OutcomeReporter;
use crate::domain::config::AppConfig;
use crate::infrastructure::console::{BufferedConsoleFactory, ProcessPanel, TerminalNotifier};
use crate::infrastructure::workspace::WorkspaceGitClient;
use crate::interface::commands::add::handle_add;
use crate::interface::selection::CliSelection;

/// Stage working-tree changes into the version-control index.
#[derive(Parser, Debug)]
#[command(name = "stagehand", version, about)]
struct Cli {
    /// Paths to stage, relative to the project root. Empty selects the
    /// whole project.
    paths: Vec<String>,

    /// Project root directory.
    #[arg(long, default_value = ".")]
    project: PathBuf,

    /// Only update files the index already tracks.
    #[arg(long)]
    update_only: bool,

    /// Stage directly, skipping the relevance check and the prompt.
    #[arg(short = 'y', long)]
    yes: bool,

    /// Path to the configuration file.
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(cli.config.as_deref())?;

    // 2. Logging Setup
    let data_dir = config
        .system
        .data_dir
        .clone()
        .unwrap_or_else(|| "data".to_string());
    if !std::path::Path::new(&data_dir).exists() {
        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
    }

    let file_appender = tracing_appender::rolling::never(&data_dir, "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"));

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // 3. Build the selection and the collaborators
    let project_dir = cli
        .project
        .canonicalize()
        .context("Failed to resolve the project root")?;
    let selection = Arc::new(CliSelection::new(&project_dir, &cli.paths)?);

    let client = Arc::new(WorkspaceGitClient::new(&config.workspace.agent_url));
    let panel = Arc::new(ProcessPanel::new());
    let reporter = OutcomeReporter::new(
        Arc::new(BufferedConsoleFactory),
        panel.clone(),
        Arc::new(TerminalNotifier),
    );

    let coordinator =
        StagingCoordinator::new(selection, client.clone(), client, reporter);

    // 4. Run the flow
    let phase = handle_add(&coordinator, cli.update_only, cli.yes).await?;
    info!(
        "add to index finished in {:?}, {} console(s) registered",
        phase,
        panel.console_count()
    );

    if phase == StagePhase::StageFailed {
        std::process::exit(1);
    }
    Ok(())
}
