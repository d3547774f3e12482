// src/main.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod chart;
mod clock;
mod data;
mod file;
mod settings;
mod state;
mod ui;
mod utils;

use app::CaseStudyApp;
use settings::{HostMode, Settings};
use state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "Property lending case study walkthrough")]
struct Cli {
    /// Settings file (TOML). Defaults to the per-user settings file when present.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    host_mode: Option<HostMode>,

    /// RON fixture file replacing the built-in case study figures
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Write the built-in fixtures as RON to this path and exit
    #[arg(long, value_name = "PATH")]
    export_fixtures: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(host_mode) = cli.host_mode {
        settings.host_mode = host_mode;
    }
    if let Some(fixtures) = cli.fixtures {
        settings.fixtures_path = Some(fixtures);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(path) = cli.export_fixtures {
        file::export_case_study(&data::CaseStudyData::default(), &path)
            .context("Failed to export built-in fixtures")?;
        return Ok(());
    }

    let data = file::load_case_study(settings.fixtures_path.as_deref())?;
    info!(host_mode = ?settings.host_mode, delay_ms = settings.analysis_delay_ms, "starting case study");

    let state = AppState::new(data, &settings);
    let host_mode = settings.host_mode;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Equihome Case Study"),
        ..Default::default()
    };

    eframe::run_native(
        "casestudy-deck",
        options,
        Box::new(move |_cc| Box::new(CaseStudyApp::new(state, host_mode))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
